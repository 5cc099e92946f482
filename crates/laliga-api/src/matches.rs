//! Handlers for `/matches` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/matches` | Every match, unordered |
//! | `GET`    | `/matches/:id` | 404 if not found |
//! | `POST`   | `/matches` | Body: [`Match`]; returns 201 + the stored match |
//! | `PUT`    | `/matches/:id` | Body: [`MatchFields`]; returns the updated match |
//! | `DELETE` | `/matches/:id` | 404 if not found |
//! | `PATCH`  | `/matches/:id/goals` | Body: [`GoalsBody`] |
//! | `PATCH`  | `/matches/:id/yellowcards` | Body: [`YellowCardsBody`] |
//! | `PATCH`  | `/matches/:id/redcards` | Body: [`RedCardsBody`] |
//! | `PATCH`  | `/matches/:id/extratime` | Body: [`ExtraMinutesBody`] |
//!
//! Every handler makes exactly one store call. Writes report rows affected,
//! and zero rows is answered with 404.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use laliga_core::{FieldPatch, Match, MatchFields, MatchStore};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{error::ApiError, extract::JsonBody};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /matches`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Match>>, ApiError>
where
  S: MatchStore,
{
  let matches = store
    .list_matches()
    .await
    .map_err(ApiError::store("Could not retrieve matches"))?;
  Ok(Json(matches))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /matches/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Match>, ApiError>
where
  S: MatchStore,
{
  let found = store
    .get_match(&id)
    .await
    .map_err(ApiError::store("Could not retrieve match"))?
    .ok_or_else(ApiError::match_not_found)?;
  Ok(Json(found))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /matches` — returns 201 + the match as stored.
///
/// A duplicate `match_id` surfaces as a store failure (500).
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<Match>,
) -> Result<impl IntoResponse, ApiError>
where
  S: MatchStore,
{
  store
    .insert_match(&body)
    .await
    .map_err(ApiError::store("Could not create match"))?;

  tracing::info!(match_id = %body.match_id, "match created");
  Ok((StatusCode::CREATED, Json(body)))
}

// ─── Replace ──────────────────────────────────────────────────────────────────

/// `PUT /matches/:id` — overwrites every mutable field.
///
/// The path id is authoritative; a `match_id` in the body is ignored.
pub async fn replace<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  JsonBody(fields): JsonBody<MatchFields>,
) -> Result<Json<Match>, ApiError>
where
  S: MatchStore,
{
  let affected = store
    .replace_match(&id, &fields)
    .await
    .map_err(ApiError::store("Could not update match"))?;
  if affected == 0 {
    return Err(ApiError::match_not_found());
  }

  tracing::info!(match_id = %id, "match replaced");
  Ok(Json(Match::from_fields(id, fields)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /matches/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: MatchStore,
{
  let affected = store
    .delete_match(&id)
    .await
    .map_err(ApiError::store("Could not delete match"))?;
  if affected == 0 {
    return Err(ApiError::match_not_found());
  }

  tracing::info!(match_id = %id, "match deleted");
  Ok(Json(json!({ "message": "Match deleted" })))
}

// ─── Field-group patches ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GoalsBody {
  pub home_goals: i64,
  pub away_goals: i64,
}

#[derive(Debug, Deserialize)]
pub struct YellowCardsBody {
  pub yellow_cards: i64,
}

#[derive(Debug, Deserialize)]
pub struct RedCardsBody {
  pub red_cards: i64,
}

#[derive(Debug, Deserialize)]
pub struct ExtraMinutesBody {
  pub extra_minutes: i64,
}

/// `PATCH /matches/:id/goals` — body: `{"home_goals":2,"away_goals":1}`
pub async fn patch_goals<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<GoalsBody>,
) -> Result<Json<Value>, ApiError>
where
  S: MatchStore,
{
  let patch = FieldPatch::Goals {
    home_goals: body.home_goals,
    away_goals: body.away_goals,
  };
  apply_patch(&*store, &id, patch).await
}

/// `PATCH /matches/:id/yellowcards` — body: `{"yellow_cards":3}`
pub async fn patch_yellow_cards<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<YellowCardsBody>,
) -> Result<Json<Value>, ApiError>
where
  S: MatchStore,
{
  apply_patch(&*store, &id, FieldPatch::YellowCards(body.yellow_cards)).await
}

/// `PATCH /matches/:id/redcards` — body: `{"red_cards":1}`
pub async fn patch_red_cards<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<RedCardsBody>,
) -> Result<Json<Value>, ApiError>
where
  S: MatchStore,
{
  apply_patch(&*store, &id, FieldPatch::RedCards(body.red_cards)).await
}

/// `PATCH /matches/:id/extratime` — body: `{"extra_minutes":5}`
pub async fn patch_extra_minutes<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  JsonBody(body): JsonBody<ExtraMinutesBody>,
) -> Result<Json<Value>, ApiError>
where
  S: MatchStore,
{
  apply_patch(&*store, &id, FieldPatch::ExtraMinutes(body.extra_minutes)).await
}

async fn apply_patch<S>(store: &S, id: &str, patch: FieldPatch) -> Result<Json<Value>, ApiError>
where
  S: MatchStore,
{
  let affected = store
    .patch_match(id, patch)
    .await
    .map_err(ApiError::store("Could not update match"))?;
  if affected == 0 {
    return Err(ApiError::match_not_found());
  }

  tracing::info!(match_id = %id, fields = patch.label(), "match patched");
  Ok(Json(json!({ "message": format!("{} updated", patch.label()) })))
}
