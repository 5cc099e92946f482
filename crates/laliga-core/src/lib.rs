//! Core types and trait definitions for the La Liga match service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store and API crates depend on it; it depends only on `serde`.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod record;
pub mod seed;
pub mod store;

pub use record::{FieldPatch, Match, MatchFields};
pub use store::MatchStore;
