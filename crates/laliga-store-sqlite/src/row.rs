//! Mapping between `matches` rows and [`Match`].

use laliga_core::Match;

/// Column list shared by every `SELECT` so [`match_from_row`] indices agree.
pub const MATCH_COLUMNS: &str = "match_id, home_team, away_team, date, \
  home_goals, away_goals, yellow_cards, red_cards, extra_minutes";

pub fn match_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Match> {
  Ok(Match {
    match_id:      row.get(0)?,
    home_team:     row.get(1)?,
    away_team:     row.get(2)?,
    date:          row.get(3)?,
    home_goals:    row.get(4)?,
    away_goals:    row.get(5)?,
    yellow_cards:  row.get(6)?,
    red_cards:     row.get(7)?,
    extra_minutes: row.get(8)?,
  })
}

/// Insert one row. `Transaction` derefs to `Connection`, so seeding shares it.
pub fn insert_row(conn: &rusqlite::Connection, m: &Match) -> rusqlite::Result<usize> {
  conn.execute(
    "INSERT INTO matches (
       match_id, home_team, away_team, date,
       home_goals, away_goals, yellow_cards, red_cards, extra_minutes
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    rusqlite::params![
      m.match_id,
      m.home_team,
      m.away_team,
      m.date,
      m.home_goals,
      m.away_goals,
      m.yellow_cards,
      m.red_cards,
      m.extra_minutes,
    ],
  )
}

/// True when `err` is SQLite refusing a row because of a constraint.
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
  matches!(
    err,
    rusqlite::Error::SqliteFailure(e, _)
      if e.code == rusqlite::ErrorCode::ConstraintViolation
  )
}
