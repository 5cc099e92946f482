//! The `MatchStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `laliga-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::{FieldPatch, Match, MatchFields};

/// Abstraction over a durable table of match records.
///
/// Mutating methods report how many rows they touched instead of re-reading
/// the row; callers map `0` to "no such match".
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait MatchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `seed` atomically when the table holds no rows.
  ///
  /// Returns the number of rows inserted (`0` if the table was non-empty).
  /// A failing insert rolls back every row of the seed.
  fn seed_if_empty<'a>(
    &'a self,
    seed: &'a [Match],
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;

  /// Every stored match, in no particular order.
  fn list_matches(
    &self,
  ) -> impl Future<Output = Result<Vec<Match>, Self::Error>> + Send + '_;

  /// Retrieve a match by id. Returns `None` if not found.
  fn get_match<'a>(
    &'a self,
    match_id: &'a str,
  ) -> impl Future<Output = Result<Option<Match>, Self::Error>> + Send + 'a;

  /// Insert a new match. Fails if `match_id` is already taken.
  fn insert_match<'a>(
    &'a self,
    record: &'a Match,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Overwrite every mutable column of `match_id`. Returns rows affected.
  fn replace_match<'a>(
    &'a self,
    match_id: &'a str,
    fields: &'a MatchFields,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;

  /// Overwrite only the columns of one field group. Returns rows affected.
  fn patch_match<'a>(
    &'a self,
    match_id: &'a str,
    patch: FieldPatch,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;

  /// Remove a match permanently. Returns rows affected.
  fn delete_match<'a>(
    &'a self,
    match_id: &'a str,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;
}
