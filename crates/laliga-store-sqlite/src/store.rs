//! [`SqliteStore`] — the SQLite implementation of [`MatchStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, TransactionBehavior};

use laliga_core::{FieldPatch, Match, MatchFields, MatchStore};

use crate::{
  row::{MATCH_COLUMNS, insert_row, is_constraint_violation, match_from_row},
  schema::SCHEMA,
  Error, Result,
};

/// `(name, type, notnull, default, pk)` as reported by `PRAGMA table_info`.
#[cfg(test)]
pub(crate) type ColumnInfo = (String, String, bool, Option<String>, i64);

// ─── Store ───────────────────────────────────────────────────────────────────

/// A match store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The
/// connection closes when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// The parent directory must already exist.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Ensure the `matches` table exists. Safe to call repeatedly; existing
  /// rows are never touched.
  pub async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of rows currently in the table.
  pub async fn count_matches(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM matches", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }

  /// `PRAGMA table_info(matches)`, one entry per column.
  #[cfg(test)]
  pub(crate) async fn table_info(&self) -> Result<Vec<ColumnInfo>> {
    let columns = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("PRAGMA table_info(matches)")?;
        let rows = stmt
          .query_map([], |r| Ok((r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?, r.get(5)?)))?
          .collect::<rusqlite::Result<Vec<ColumnInfo>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(columns)
  }
}

// ─── MatchStore impl ─────────────────────────────────────────────────────────

impl MatchStore for SqliteStore {
  type Error = Error;

  async fn seed_if_empty(&self, seed: &[Match]) -> Result<usize> {
    let seed = seed.to_vec();

    let inserted = self
      .conn
      .call(move |conn| {
        // IMMEDIATE takes the write lock before the count, so no other
        // writer can slip in between the check and the inserts.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing: i64 =
          tx.query_row("SELECT COUNT(*) FROM matches", [], |r| r.get(0))?;
        if existing > 0 {
          return Ok(0);
        }

        // Any `?` below drops `tx` uncommitted, which rolls back.
        for m in &seed {
          insert_row(&tx, m)?;
        }
        tx.commit()?;
        Ok(seed.len())
      })
      .await?;

    Ok(inserted)
  }

  async fn list_matches(&self) -> Result<Vec<Match>> {
    let matches = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {MATCH_COLUMNS} FROM matches"))?;
        let rows = stmt
          .query_map([], match_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(matches)
  }

  async fn get_match(&self, match_id: &str) -> Result<Option<Match>> {
    let id = match_id.to_owned();

    let found = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = ?1"),
            rusqlite::params![id],
            match_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(found)
  }

  async fn insert_match(&self, record: &Match) -> Result<()> {
    let record = record.clone();
    let id     = record.match_id.clone();

    let inserted = self
      .conn
      .call(move |conn| match insert_row(conn, &record) {
        Ok(_) => Ok(true),
        Err(e) if is_constraint_violation(&e) => Ok(false),
        Err(e) => Err(e.into()),
      })
      .await?;

    if inserted { Ok(()) } else { Err(Error::DuplicateMatch(id)) }
  }

  async fn replace_match(&self, match_id: &str, fields: &MatchFields) -> Result<u64> {
    let id     = match_id.to_owned();
    let fields = fields.clone();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE matches SET
             home_team = ?1, away_team = ?2, date = ?3,
             home_goals = ?4, away_goals = ?5,
             yellow_cards = ?6, red_cards = ?7, extra_minutes = ?8
           WHERE match_id = ?9",
          rusqlite::params![
            fields.home_team,
            fields.away_team,
            fields.date,
            fields.home_goals,
            fields.away_goals,
            fields.yellow_cards,
            fields.red_cards,
            fields.extra_minutes,
            id,
          ],
        )?)
      })
      .await?;
    Ok(affected as u64)
  }

  async fn patch_match(&self, match_id: &str, patch: FieldPatch) -> Result<u64> {
    let id = match_id.to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        let n = match patch {
          FieldPatch::Goals { home_goals, away_goals } => conn.execute(
            "UPDATE matches SET home_goals = ?1, away_goals = ?2 WHERE match_id = ?3",
            rusqlite::params![home_goals, away_goals, id],
          )?,
          FieldPatch::YellowCards(n) => conn.execute(
            "UPDATE matches SET yellow_cards = ?1 WHERE match_id = ?2",
            rusqlite::params![n, id],
          )?,
          FieldPatch::RedCards(n) => conn.execute(
            "UPDATE matches SET red_cards = ?1 WHERE match_id = ?2",
            rusqlite::params![n, id],
          )?,
          FieldPatch::ExtraMinutes(n) => conn.execute(
            "UPDATE matches SET extra_minutes = ?1 WHERE match_id = ?2",
            rusqlite::params![n, id],
          )?,
        };
        Ok(n)
      })
      .await?;
    Ok(affected as u64)
  }

  async fn delete_match(&self, match_id: &str) -> Result<u64> {
    let id = match_id.to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM matches WHERE match_id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(affected as u64)
  }
}
