//! Fixtures inserted into an empty store on first start.

use crate::record::Match;

/// The fixed seed set. Statistics start at zero.
pub fn fixtures() -> Vec<Match> {
  vec![
    Match::new("1", "Real Madrid", "Barcelona", "2024-10-26"),
    Match::new("2", "Atletico Madrid", "Sevilla", "2024-10-27"),
    Match::new("3", "Valencia", "Villarreal", "2024-11-02"),
    Match::new("4", "Athletic Club", "Real Sociedad", "2024-11-03"),
    Match::new("5", "Real Betis", "Osasuna", "2024-11-09"),
  ]
}
