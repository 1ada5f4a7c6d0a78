//! SQL schema for the casebook SQLite store.

/// Applied to every new connection. SQLite leaves foreign keys off unless
/// asked, and the cascade rules below depend on them.
pub const PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const CREATE_ALL: &str = "
CREATE TABLE IF NOT EXISTS defences (
    defence_id     INTEGER PRIMARY KEY AUTOINCREMENT,
    defence_type   TEXT NOT NULL,   -- upper-cased on insert; not unique
    essay_question INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS law_cases (
    law_case_id INTEGER PRIMARY KEY AUTOINCREMENT,
    defence_id  INTEGER NOT NULL REFERENCES defences(defence_id) ON DELETE CASCADE,
    case_name   TEXT NOT NULL,
    case_text   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS quizzes (
    quiz_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    defence_id INTEGER NOT NULL REFERENCES defences(defence_id) ON DELETE CASCADE,
    quiz_title TEXT NOT NULL,
    quiz_link  TEXT
);

-- defence_id is denormalised from the owning quiz.
CREATE TABLE IF NOT EXISTS quiz_questions (
    question_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    quiz_id       INTEGER NOT NULL REFERENCES quizzes(quiz_id) ON DELETE CASCADE,
    defence_id    INTEGER NOT NULL REFERENCES defences(defence_id) ON DELETE CASCADE,
    question_text TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS quiz_answers (
    answer_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id INTEGER NOT NULL REFERENCES quiz_questions(question_id) ON DELETE CASCADE,
    answer_text TEXT NOT NULL,
    is_correct  INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    email   TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS scores (
    score_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    quiz_id     INTEGER NOT NULL REFERENCES quizzes(quiz_id) ON DELETE CASCADE,
    score_value INTEGER NOT NULL,
    date_taken  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS law_cases_defence_idx ON law_cases(defence_id);
CREATE INDEX IF NOT EXISTS questions_quiz_idx    ON quiz_questions(quiz_id);
CREATE INDEX IF NOT EXISTS answers_question_idx  ON quiz_answers(question_id);
";

/// Children are dropped before their parents so the drop also succeeds
/// with foreign keys enforced.
pub const DROP_ALL: &str = "
DROP TABLE IF EXISTS scores;
DROP TABLE IF EXISTS quiz_answers;
DROP TABLE IF EXISTS quiz_questions;
DROP TABLE IF EXISTS quizzes;
DROP TABLE IF EXISTS law_cases;
DROP TABLE IF EXISTS users;
DROP TABLE IF EXISTS defences;
";

/// Every table created by [`CREATE_ALL`].
#[cfg(test)]
pub const TABLES: [&str; 7] = [
  "defences",
  "law_cases",
  "quizzes",
  "quiz_questions",
  "quiz_answers",
  "users",
  "scores",
];
