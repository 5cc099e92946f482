//! Integration tests for `SqliteStore` against an in-memory database.

use laliga_core::{FieldPatch, Match, MatchStore, seed};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn celta_getafe() -> Match {
  Match::new("10", "Celta", "Getafe", "2024-01-01")
}

fn full_match() -> Match {
  Match {
    match_id:      "20".into(),
    home_team:     "Girona".into(),
    away_team:     "Mallorca".into(),
    date:          "2024-02-17".into(),
    home_goals:    3,
    away_goals:    1,
    yellow_cards:  4,
    red_cards:     1,
    extra_minutes: 7,
  }
}

/// `m` as it should read after `patch` lands.
fn patched(mut m: Match, patch: FieldPatch) -> Match {
  match patch {
    FieldPatch::Goals { home_goals, away_goals } => {
      m.home_goals = home_goals;
      m.away_goals = away_goals;
    }
    FieldPatch::YellowCards(n) => m.yellow_cards = n,
    FieldPatch::RedCards(n) => m.red_cards = n,
    FieldPatch::ExtraMinutes(n) => m.extra_minutes = n,
  }
  m
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn init_schema_twice_keeps_rows() {
  let s = store().await;
  s.insert_match(&full_match()).await.unwrap();

  let shape_before = s.table_info().await.unwrap();
  s.init_schema().await.unwrap();
  let shape_after = s.table_info().await.unwrap();

  assert_eq!(shape_before, shape_after);
  assert_eq!(shape_before.len(), 9);
  assert_eq!(s.count_matches().await.unwrap(), 1);
  assert_eq!(s.get_match("20").await.unwrap(), Some(full_match()));
}

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_matches().await.unwrap().is_empty());
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_populates_empty_store_once() {
  let s = store().await;
  let fixtures = seed::fixtures();

  let inserted = s.seed_if_empty(&fixtures).await.unwrap();
  assert_eq!(inserted, fixtures.len());

  let again = s.seed_if_empty(&fixtures).await.unwrap();
  assert_eq!(again, 0);
  assert_eq!(s.count_matches().await.unwrap(), fixtures.len() as u64);
}

#[tokio::test]
async fn seed_skipped_when_store_has_rows() {
  let s = store().await;
  s.insert_match(&celta_getafe()).await.unwrap();

  let inserted = s.seed_if_empty(&seed::fixtures()).await.unwrap();
  assert_eq!(inserted, 0);

  let all = s.list_matches().await.unwrap();
  assert_eq!(all, vec![celta_getafe()]);
}

#[tokio::test]
async fn failing_seed_rolls_back_every_row() {
  let s = store().await;
  // Second row collides with the first on the primary key.
  let bad_seed = vec![
    Match::new("1", "A", "B", "2024-01-01"),
    Match::new("1", "C", "D", "2024-01-02"),
  ];

  assert!(s.seed_if_empty(&bad_seed).await.is_err());
  assert_eq!(s.count_matches().await.unwrap(), 0);
}

#[tokio::test]
async fn seed_once_survives_reopen() {
  let tmp  = tempfile::tempdir().unwrap();
  let path = tmp.path().join("reopen.db");

  let fixtures = seed::fixtures();
  {
    let s = SqliteStore::open(&path).await.unwrap();
    assert_eq!(s.seed_if_empty(&fixtures).await.unwrap(), fixtures.len());
    s.delete_match("1").await.unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.seed_if_empty(&fixtures).await.unwrap(), 0);
  assert_eq!(s.count_matches().await.unwrap(), fixtures.len() as u64 - 1);
  assert!(s.get_match("1").await.unwrap().is_none());
}

// ─── Create / read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_round_trip() {
  let s = store().await;
  s.insert_match(&full_match()).await.unwrap();

  let fetched = s.get_match("20").await.unwrap();
  assert_eq!(fetched, Some(full_match()));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_match("404").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_insert_errors_and_keeps_original() {
  let s = store().await;
  s.insert_match(&full_match()).await.unwrap();

  let mut clash = celta_getafe();
  clash.match_id = "20".into();
  let err = s.insert_match(&clash).await.unwrap_err();
  assert!(matches!(err, crate::Error::DuplicateMatch(ref id) if id == "20"));

  assert_eq!(s.get_match("20").await.unwrap(), Some(full_match()));
}

#[tokio::test]
async fn list_returns_every_row() {
  let s = store().await;
  s.insert_match(&celta_getafe()).await.unwrap();
  s.insert_match(&full_match()).await.unwrap();

  let mut ids: Vec<_> = s
    .list_matches()
    .await
    .unwrap()
    .into_iter()
    .map(|m| m.match_id)
    .collect();
  ids.sort();
  assert_eq!(ids, ["10", "20"]);
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_every_mutable_column() {
  let s = store().await;
  s.insert_match(&celta_getafe()).await.unwrap();

  let fields = full_match().fields();
  let affected = s.replace_match("10", &fields).await.unwrap();
  assert_eq!(affected, 1);

  let fetched = s.get_match("10").await.unwrap().unwrap();
  assert_eq!(fetched, Match::from_fields("10", fields));
}

#[tokio::test]
async fn replace_missing_affects_no_rows() {
  let s = store().await;
  let affected = s.replace_match("nope", &full_match().fields()).await.unwrap();
  assert_eq!(affected, 0);
  assert_eq!(s.count_matches().await.unwrap(), 0);
}

// ─── Patch ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn each_patch_touches_only_its_columns() {
  let patches = [
    FieldPatch::Goals { home_goals: 5, away_goals: 0 },
    FieldPatch::YellowCards(9),
    FieldPatch::RedCards(2),
    FieldPatch::ExtraMinutes(11),
  ];

  for patch in patches {
    let s = store().await;
    s.insert_match(&full_match()).await.unwrap();

    assert_eq!(s.patch_match("20", patch).await.unwrap(), 1, "{patch:?}");

    let expected = patched(full_match(), patch);
    assert_eq!(s.get_match("20").await.unwrap(), Some(expected), "{patch:?}");
  }
}

#[tokio::test]
async fn patch_missing_affects_no_rows() {
  let s = store().await;
  let affected = s.patch_match("nope", FieldPatch::RedCards(1)).await.unwrap();
  assert_eq!(affected, 0);
}

#[tokio::test]
async fn patch_accepts_negative_values() {
  let s = store().await;
  s.insert_match(&celta_getafe()).await.unwrap();
  s.patch_match("10", FieldPatch::ExtraMinutes(-4)).await.unwrap();

  let fetched = s.get_match("10").await.unwrap().unwrap();
  assert_eq!(fetched.extra_minutes, -4);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_is_final() {
  let s = store().await;
  s.insert_match(&celta_getafe()).await.unwrap();

  assert_eq!(s.delete_match("10").await.unwrap(), 1);
  assert!(s.get_match("10").await.unwrap().is_none());
  assert_eq!(s.delete_match("10").await.unwrap(), 0);
}

#[tokio::test]
async fn deleted_id_can_be_recreated() {
  let s = store().await;
  s.insert_match(&celta_getafe()).await.unwrap();
  s.delete_match("10").await.unwrap();

  s.insert_match(&celta_getafe()).await.unwrap();
  assert_eq!(s.get_match("10").await.unwrap(), Some(celta_getafe()));
}
