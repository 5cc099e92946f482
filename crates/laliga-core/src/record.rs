//! The match record and its field groups.
//!
//! A [`Match`] is the only persisted entity. Its mutable columns are grouped
//! into [`MatchFields`] (everything replaced by a full update) and the four
//! [`FieldPatch`] groups that can be updated in isolation.

use serde::{Deserialize, Serialize};

/// One football fixture and its statistics.
///
/// `date` is stored as opaque `YYYY-MM-DD` text. Numeric fields default to
/// zero when omitted and are not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
  pub match_id:      String,
  pub home_team:     String,
  pub away_team:     String,
  pub date:          String,
  #[serde(default)]
  pub home_goals:    i64,
  #[serde(default)]
  pub away_goals:    i64,
  #[serde(default)]
  pub yellow_cards:  i64,
  #[serde(default)]
  pub red_cards:     i64,
  #[serde(default)]
  pub extra_minutes: i64,
}

impl Match {
  /// A fixture with all statistics at zero.
  pub fn new(
    match_id:  impl Into<String>,
    home_team: impl Into<String>,
    away_team: impl Into<String>,
    date:      impl Into<String>,
  ) -> Self {
    Self::from_fields(match_id, MatchFields {
      home_team:     home_team.into(),
      away_team:     away_team.into(),
      date:          date.into(),
      home_goals:    0,
      away_goals:    0,
      yellow_cards:  0,
      red_cards:     0,
      extra_minutes: 0,
    })
  }

  /// Attach an identifier to a set of mutable fields.
  pub fn from_fields(match_id: impl Into<String>, fields: MatchFields) -> Self {
    Self {
      match_id:      match_id.into(),
      home_team:     fields.home_team,
      away_team:     fields.away_team,
      date:          fields.date,
      home_goals:    fields.home_goals,
      away_goals:    fields.away_goals,
      yellow_cards:  fields.yellow_cards,
      red_cards:     fields.red_cards,
      extra_minutes: fields.extra_minutes,
    }
  }

  /// Every column except the primary key.
  pub fn fields(&self) -> MatchFields {
    MatchFields {
      home_team:     self.home_team.clone(),
      away_team:     self.away_team.clone(),
      date:          self.date.clone(),
      home_goals:    self.home_goals,
      away_goals:    self.away_goals,
      yellow_cards:  self.yellow_cards,
      red_cards:     self.red_cards,
      extra_minutes: self.extra_minutes,
    }
  }
}

/// The mutable columns of a match, written together by a full replace.
///
/// The primary key is deliberately absent: it is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFields {
  pub home_team:     String,
  pub away_team:     String,
  pub date:          String,
  #[serde(default)]
  pub home_goals:    i64,
  #[serde(default)]
  pub away_goals:    i64,
  #[serde(default)]
  pub yellow_cards:  i64,
  #[serde(default)]
  pub red_cards:     i64,
  #[serde(default)]
  pub extra_minutes: i64,
}

/// One of the four closed field groups that may be updated on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPatch {
  Goals { home_goals: i64, away_goals: i64 },
  YellowCards(i64),
  RedCards(i64),
  ExtraMinutes(i64),
}

impl FieldPatch {
  /// Short label used in confirmation messages and logs.
  pub fn label(&self) -> &'static str {
    match self {
      FieldPatch::Goals { .. } => "Goals",
      FieldPatch::YellowCards(_) => "Yellow cards",
      FieldPatch::RedCards(_) => "Red cards",
      FieldPatch::ExtraMinutes(_) => "Extra minutes",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn omitted_statistics_default_to_zero() {
    let m: Match = serde_json::from_str(
      r#"{"match_id":"10","home_team":"Celta","away_team":"Getafe","date":"2024-01-01"}"#,
    )
    .unwrap();
    assert_eq!(m, Match::new("10", "Celta", "Getafe", "2024-01-01"));
  }

  #[test]
  fn negative_statistics_are_accepted() {
    let m: Match = serde_json::from_str(
      r#"{"match_id":"1","home_team":"A","away_team":"B","date":"2024-01-01","red_cards":-3}"#,
    )
    .unwrap();
    assert_eq!(m.red_cards, -3);
  }

  #[test]
  fn missing_team_is_rejected() {
    let err = serde_json::from_str::<Match>(
      r#"{"match_id":"1","away_team":"B","date":"2024-01-01"}"#,
    );
    assert!(err.is_err());
  }

  #[test]
  fn fields_round_trip_through_from_fields() {
    let mut m = Match::new("7", "Sevilla", "Betis", "2024-03-03");
    m.home_goals = 3;
    m.extra_minutes = 6;
    assert_eq!(Match::from_fields("7", m.fields()), m);
  }
}
