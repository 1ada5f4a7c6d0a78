//! Row decoding between SQLite columns and the domain types in
//! `casebook-core`.
//!
//! Booleans are stored as `0`/`1` integers. `date_taken` is written by
//! SQLite's `CURRENT_TIMESTAMP` as `YYYY-MM-DD HH:MM:SS` in UTC.

use casebook_core::{
  defence::{Defence, LawCase},
  quiz::Quiz,
  user::{Score, User},
};
use chrono::NaiveDateTime;
use rusqlite::Row;

use crate::{Error, Result};

const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

pub fn decode_timestamp(s: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Plain rows ───────────────────────────────────────────────────────────────

pub fn defence_from_row(row: &Row<'_>) -> rusqlite::Result<Defence> {
  Ok(Defence {
    defence_id:         row.get(0)?,
    defence_type:       row.get(1)?,
    has_essay_question: row.get(2)?,
  })
}

pub fn law_case_from_row(row: &Row<'_>) -> rusqlite::Result<LawCase> {
  Ok(LawCase {
    law_case_id: row.get(0)?,
    defence_id:  row.get(1)?,
    case_name:   row.get(2)?,
    case_text:   row.get(3)?,
  })
}

pub fn quiz_from_row(row: &Row<'_>) -> rusqlite::Result<Quiz> {
  Ok(Quiz {
    quiz_id:    row.get(0)?,
    defence_id: row.get(1)?,
    title:      row.get(2)?,
    link:       row.get(3)?,
  })
}

pub fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    user_id: row.get(0)?,
    name:    row.get(1)?,
    email:   row.get(2)?,
  })
}

// ─── Scores ───────────────────────────────────────────────────────────────────

/// A score row before its timestamp has been parsed.
pub struct RawScore {
  pub score_id:    i64,
  pub user_id:     i64,
  pub quiz_id:     i64,
  pub score_value: i64,
  pub date_taken:  String,
}

impl RawScore {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      score_id:    row.get(0)?,
      user_id:     row.get(1)?,
      quiz_id:     row.get(2)?,
      score_value: row.get(3)?,
      date_taken:  row.get(4)?,
    })
  }

  pub fn into_score(self) -> Result<Score> {
    Ok(Score {
      score_id:    self.score_id,
      user_id:     self.user_id,
      quiz_id:     self.quiz_id,
      score_value: self.score_value,
      date_taken:  decode_timestamp(&self.date_taken)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Datelike, Timelike};

  use super::*;

  #[test]
  fn decodes_current_timestamp_format() {
    let dt = decode_timestamp("2024-03-09 14:05:59").unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 9));
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 5, 59));
  }

  #[test]
  fn rejects_malformed_timestamp() {
    let err = decode_timestamp("yesterday").unwrap_err();
    assert!(matches!(err, Error::DateParse(_)));
  }
}
