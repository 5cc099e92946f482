//! SQL schema for the match store.
//!
//! Executed at every connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One self-contained row per fixture; no foreign keys.
CREATE TABLE IF NOT EXISTS matches (
    match_id      TEXT PRIMARY KEY,
    home_team     TEXT NOT NULL,
    away_team     TEXT NOT NULL,
    date          TEXT NOT NULL,   -- YYYY-MM-DD, stored as given
    home_goals    INTEGER NOT NULL DEFAULT 0,
    away_goals    INTEGER NOT NULL DEFAULT 0,
    yellow_cards  INTEGER NOT NULL DEFAULT 0,
    red_cards     INTEGER NOT NULL DEFAULT 0,
    extra_minutes INTEGER NOT NULL DEFAULT 0
);

PRAGMA user_version = 1;
";
