//! [`SqliteStore`], the SQLite implementation of [`CaseStore`].

use std::path::Path;

use casebook_core::{
  defence::{Defence, DefenceId, LawCase, NewLawCase},
  quiz::{AnswerChoice, NewAnswer, Quiz, QuizId, QuizQuestion, QuestionId},
  store::CaseStore,
  user::{Score, ScoreId, User, UserId},
};
use rusqlite::{Connection, OptionalExtension as _, params};

use crate::{
  encode::{RawScore, defence_from_row, law_case_from_row, quiz_from_row, user_from_row},
  schema::{CREATE_ALL, DROP_ALL, PRAGMAS},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A casebook store backed by a single SQLite file.
///
/// The connection is closed when the store is dropped; [`CaseStore::close`]
/// does the same but reports any error from the engine.
pub struct SqliteStore {
  pub(crate) conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and create any missing tables.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = Connection::open(path)?;
    Self::init(conn)
  }

  /// Open an in-memory store, mainly for tests.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory()?;
    Self::init(conn)
  }

  fn init(conn: Connection) -> Result<Self> {
    conn.execute_batch(PRAGMAS)?;
    let store = Self { conn };
    store.create_all()?;
    Ok(store)
  }

  /// Number of rows currently in `table`.
  #[cfg(test)]
  pub(crate) fn row_count(&self, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', "\"\""));
    Ok(self.conn.query_row(&sql, [], |r| r.get(0))?)
  }

  fn query_scores(&self, sql: &str, id: i64) -> Result<Vec<Score>> {
    let mut stmt = self.conn.prepare(sql)?;
    let raws = stmt
      .query_map(params![id], RawScore::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    raws.into_iter().map(RawScore::into_score).collect()
  }
}

// ─── CaseStore impl ──────────────────────────────────────────────────────────

impl CaseStore for SqliteStore {
  type Error = Error;

  // ── Schema ────────────────────────────────────────────────────────────────

  fn drop_all(&self) -> Result<()> {
    self.conn.execute_batch(DROP_ALL)?;
    tracing::debug!("dropped all tables");
    Ok(())
  }

  fn create_all(&self) -> Result<()> {
    self.conn.execute_batch(CREATE_ALL)?;
    Ok(())
  }

  fn close(self) -> Result<()> {
    self.conn.close().map_err(|(_, e)| Error::Database(e))
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  fn add_defence(&self, defence_type: &str, has_essay_question: bool) -> Result<DefenceId> {
    self.conn.execute(
      "INSERT INTO defences (defence_type, essay_question) VALUES (?1, ?2)",
      params![defence_type.to_uppercase(), has_essay_question],
    )?;
    Ok(self.conn.last_insert_rowid())
  }

  fn add_law_cases(&self, cases: &[NewLawCase]) -> Result<()> {
    let tx = self.conn.unchecked_transaction()?;
    {
      let mut stmt = tx.prepare(
        "INSERT INTO law_cases (defence_id, case_name, case_text) VALUES (?1, ?2, ?3)",
      )?;
      for case in cases {
        stmt.execute(params![case.defence_id, case.case_name, case.case_text])?;
      }
    }
    tx.commit()?;
    Ok(())
  }

  fn add_quiz(&self, defence_id: DefenceId, title: &str, link: Option<&str>) -> Result<QuizId> {
    self.conn.execute(
      "INSERT INTO quizzes (defence_id, quiz_title, quiz_link) VALUES (?1, ?2, ?3)",
      params![defence_id, title, link],
    )?;
    Ok(self.conn.last_insert_rowid())
  }

  fn add_question(
    &self,
    quiz_id:    QuizId,
    defence_id: DefenceId,
    text:       &str,
  ) -> Result<QuestionId> {
    self.conn.execute(
      "INSERT INTO quiz_questions (quiz_id, defence_id, question_text) VALUES (?1, ?2, ?3)",
      params![quiz_id, defence_id, text],
    )?;
    Ok(self.conn.last_insert_rowid())
  }

  fn add_answers(&self, answers: &[NewAnswer]) -> Result<()> {
    let tx = self.conn.unchecked_transaction()?;
    {
      let mut stmt = tx.prepare(
        "INSERT INTO quiz_answers (question_id, answer_text, is_correct) VALUES (?1, ?2, ?3)",
      )?;
      for answer in answers {
        stmt.execute(params![answer.question_id, answer.text, answer.is_correct])?;
      }
    }
    tx.commit()?;
    Ok(())
  }

  fn add_user(&self, name: &str, email: &str) -> Result<UserId> {
    let existing: Option<UserId> = self
      .conn
      .query_row(
        "SELECT user_id FROM users WHERE email = ?1",
        params![email],
        |r| r.get(0),
      )
      .optional()?;

    if let Some(user_id) = existing {
      tracing::info!(email, user_id, "user with this email already exists");
      return Ok(user_id);
    }

    self.conn.execute(
      "INSERT INTO users (name, email) VALUES (?1, ?2)",
      params![name, email],
    )?;
    Ok(self.conn.last_insert_rowid())
  }

  fn add_score(&self, user_id: UserId, quiz_id: QuizId, score_value: i64) -> Result<ScoreId> {
    self.conn.execute(
      "INSERT INTO scores (user_id, quiz_id, score_value) VALUES (?1, ?2, ?3)",
      params![user_id, quiz_id, score_value],
    )?;
    Ok(self.conn.last_insert_rowid())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  fn all_defences(&self) -> Result<Vec<Defence>> {
    let mut stmt = self.conn.prepare(
      "SELECT defence_id, defence_type, essay_question FROM defences ORDER BY defence_id",
    )?;
    let rows = stmt
      .query_map([], defence_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn all_law_cases(&self) -> Result<Vec<LawCase>> {
    let mut stmt = self.conn.prepare(
      "SELECT law_case_id, defence_id, case_name, case_text FROM law_cases ORDER BY law_case_id",
    )?;
    let rows = stmt
      .query_map([], law_case_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn all_quizzes(&self) -> Result<Vec<Quiz>> {
    let mut stmt = self.conn.prepare(
      "SELECT quiz_id, defence_id, quiz_title, quiz_link FROM quizzes ORDER BY quiz_id",
    )?;
    let rows = stmt
      .query_map([], quiz_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn all_users(&self) -> Result<Vec<User>> {
    let mut stmt = self
      .conn
      .prepare("SELECT user_id, name, email FROM users ORDER BY user_id")?;
    let rows = stmt
      .query_map([], user_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn law_cases_by_defence(&self, defence_id: DefenceId) -> Result<Vec<LawCase>> {
    let mut stmt = self.conn.prepare(
      "SELECT law_case_id, defence_id, case_name, case_text
       FROM law_cases
       WHERE defence_id = ?1
       ORDER BY law_case_id",
    )?;
    let rows = stmt
      .query_map(params![defence_id], law_case_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn law_by_defence_keyword(&self, keyword: &str) -> Result<Vec<(String, String)>> {
    let pattern = format!("%{}%", keyword.to_uppercase());
    let mut stmt = self.conn.prepare(
      "SELECT l.case_name, l.case_text
       FROM law_cases l
       INNER JOIN defences d ON l.defence_id = d.defence_id
       WHERE d.defence_type LIKE ?1
       ORDER BY l.law_case_id",
    )?;
    let rows = stmt
      .query_map(params![pattern], |r| Ok((r.get(0)?, r.get(1)?)))?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn case_law_text_by_name(&self, keyword: &str) -> Result<Vec<String>> {
    let pattern = format!("%{keyword}%");
    let mut stmt = self.conn.prepare(
      "SELECT case_text FROM law_cases WHERE case_name LIKE ?1 ORDER BY law_case_id",
    )?;
    let rows = stmt
      .query_map(params![pattern], |r| r.get(0))?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn quiz_with_questions_answers(&self, quiz_id: QuizId) -> Result<Vec<QuizQuestion>> {
    // One joined query; rows arrive grouped by question.
    let mut stmt = self.conn.prepare(
      "SELECT q.question_id, q.question_text, a.answer_text, a.is_correct
       FROM quiz_questions q
       LEFT JOIN quiz_answers a ON a.question_id = q.question_id
       WHERE q.quiz_id = ?1
       ORDER BY q.question_id, a.answer_id",
    )?;
    let rows = stmt
      .query_map(params![quiz_id], |r| {
        Ok((
          r.get::<_, QuestionId>(0)?,
          r.get::<_, String>(1)?,
          r.get::<_, Option<String>>(2)?,
          r.get::<_, Option<bool>>(3)?,
        ))
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut questions: Vec<QuizQuestion> = Vec::new();
    let mut current: Option<QuestionId> = None;
    for (question_id, question_text, answer_text, is_correct) in rows {
      if current != Some(question_id) {
        questions.push(QuizQuestion { text: question_text, answers: Vec::new() });
        current = Some(question_id);
      }
      if let (Some(text), Some(question)) = (answer_text, questions.last_mut()) {
        question.answers.push(AnswerChoice {
          text,
          is_correct: is_correct.unwrap_or(false),
        });
      }
    }
    Ok(questions)
  }

  fn scores_by_user(&self, user_id: UserId) -> Result<Vec<Score>> {
    self.query_scores(
      "SELECT score_id, user_id, quiz_id, score_value, date_taken
       FROM scores
       WHERE user_id = ?1
       ORDER BY score_id",
      user_id,
    )
  }

  fn scores_by_quiz(&self, quiz_id: QuizId) -> Result<Vec<Score>> {
    self.query_scores(
      "SELECT score_id, user_id, quiz_id, score_value, date_taken
       FROM scores
       WHERE quiz_id = ?1
       ORDER BY score_id",
      quiz_id,
    )
  }
}
