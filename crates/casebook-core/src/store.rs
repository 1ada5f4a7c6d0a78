//! The `CaseStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `casebook-store-sqlite`).
//! The site assembler and the seed binary depend on this abstraction, not on
//! any concrete backend.

use crate::{
  defence::{Defence, DefenceId, LawCase, NewLawCase},
  quiz::{NewAnswer, Quiz, QuizId, QuizQuestion, QuestionId},
  user::{Score, ScoreId, User, UserId},
};

/// Abstraction over a casebook store backend.
///
/// Rows are only ever inserted. Nothing is updated in place, and rows are
/// removed only by dropping the schema or by a cascading delete.
pub trait CaseStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Schema ────────────────────────────────────────────────────────────

  /// Drop every known table if present.
  fn drop_all(&self) -> Result<(), Self::Error>;

  /// Create every table if missing. Safe to call repeatedly.
  fn create_all(&self) -> Result<(), Self::Error>;

  /// Drop and recreate the schema, leaving every table empty.
  fn reset(&self) -> Result<(), Self::Error> {
    self.drop_all()?;
    self.create_all()
  }

  /// Release the underlying connection, reporting any close error.
  fn close(self) -> Result<(), Self::Error>
  where
    Self: Sized;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert a defence. The type is upper-cased before it is stored and no
  /// uniqueness check is made.
  fn add_defence(
    &self,
    defence_type: &str,
    has_essay_question: bool,
  ) -> Result<DefenceId, Self::Error>;

  /// Insert a batch of cases in one transaction.
  fn add_law_cases(&self, cases: &[NewLawCase]) -> Result<(), Self::Error>;

  fn add_quiz(
    &self,
    defence_id: DefenceId,
    title: &str,
    link: Option<&str>,
  ) -> Result<QuizId, Self::Error>;

  fn add_question(
    &self,
    quiz_id: QuizId,
    defence_id: DefenceId,
    text: &str,
  ) -> Result<QuestionId, Self::Error>;

  /// Insert a batch of answers in one transaction.
  fn add_answers(&self, answers: &[NewAnswer]) -> Result<(), Self::Error>;

  /// Find-or-create by email. An existing user keeps its id and name.
  fn add_user(&self, name: &str, email: &str) -> Result<UserId, Self::Error>;

  /// Record a score. `date_taken` is assigned by the store.
  fn add_score(
    &self,
    user_id: UserId,
    quiz_id: QuizId,
    score_value: i64,
  ) -> Result<ScoreId, Self::Error>;

  // ── Reads ─────────────────────────────────────────────────────────────

  fn all_defences(&self) -> Result<Vec<Defence>, Self::Error>;

  fn all_law_cases(&self) -> Result<Vec<LawCase>, Self::Error>;

  fn all_quizzes(&self) -> Result<Vec<Quiz>, Self::Error>;

  fn all_users(&self) -> Result<Vec<User>, Self::Error>;

  /// Cases owned by a single defence.
  fn law_cases_by_defence(
    &self,
    defence_id: DefenceId,
  ) -> Result<Vec<LawCase>, Self::Error>;

  /// `(case_name, case_text)` for every case whose defence type contains
  /// `keyword`, ignoring case.
  fn law_by_defence_keyword(
    &self,
    keyword: &str,
  ) -> Result<Vec<(String, String)>, Self::Error>;

  /// Text of every case whose name contains `keyword`.
  fn case_law_text_by_name(&self, keyword: &str) -> Result<Vec<String>, Self::Error>;

  /// Every question of a quiz with its answers. Empty for an unknown quiz.
  fn quiz_with_questions_answers(
    &self,
    quiz_id: QuizId,
  ) -> Result<Vec<QuizQuestion>, Self::Error>;

  fn scores_by_user(&self, user_id: UserId) -> Result<Vec<Score>, Self::Error>;

  fn scores_by_quiz(&self, quiz_id: QuizId) -> Result<Vec<Score>, Self::Error>;
}
