//! Users and the quiz scores they record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::quiz::QuizId;

pub type UserId = i64;
pub type ScoreId = i64;

/// A quiz taker. Email addresses are unique across users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub user_id: UserId,
  pub name:    String,
  pub email:   String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
  pub score_id:    ScoreId,
  pub user_id:     UserId,
  pub quiz_id:     QuizId,
  pub score_value: i64,
  /// Assigned by the store when the row is inserted (UTC).
  pub date_taken:  NaiveDateTime,
}
