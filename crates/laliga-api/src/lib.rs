//! JSON REST API for La Liga match records.
//!
//! Exposes an axum [`Router`] backed by any [`laliga_core::MatchStore`].
//! CORS, timeouts and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = laliga_api::api_router(Arc::new(store)).layer(TraceLayer::new_for_http());
//! ```

pub mod error;
pub mod extract;
pub mod matches;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, patch},
};
use laliga_core::MatchStore;
use serde_json::{Value, json};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: MatchStore + 'static,
{
  Router::new()
    .route("/ping", get(ping))
    .route("/matches", get(matches::list::<S>).post(matches::create::<S>))
    .route(
      "/matches/{id}",
      get(matches::get_one::<S>)
        .put(matches::replace::<S>)
        .delete(matches::delete_one::<S>),
    )
    // Field-group patches
    .route("/matches/{id}/goals", patch(matches::patch_goals::<S>))
    .route("/matches/{id}/yellowcards", patch(matches::patch_yellow_cards::<S>))
    .route("/matches/{id}/redcards", patch(matches::patch_red_cards::<S>))
    .route("/matches/{id}/extratime", patch(matches::patch_extra_minutes::<S>))
    .with_state(store)
}

/// `GET /ping`
async fn ping() -> Json<Value> {
  Json(json!({ "message": "pong" }))
}
