//! Quizzes, their questions, and multiple-choice answers.

use serde::{Deserialize, Serialize};

use crate::defence::{DefenceId, slug, title_case};

pub type QuizId = i64;
pub type QuestionId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
  pub quiz_id:    QuizId,
  pub defence_id: DefenceId,
  pub title:      String,
  pub link:       Option<String>,
}

impl Quiz {
  pub fn slug(&self) -> String { slug(&self.title) }

  pub fn label(&self) -> String { title_case(&self.title) }
}

/// An answer to be inserted under an existing question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
  pub question_id: QuestionId,
  pub text:        String,
  pub is_correct:  bool,
}

impl NewAnswer {
  pub fn new(question_id: QuestionId, text: impl Into<String>, is_correct: bool) -> Self {
    Self { question_id, text: text.into(), is_correct }
  }
}

/// One answer option as seen by a quiz taker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
  pub text:       String,
  pub is_correct: bool,
}

/// A question with its answers in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
  pub text:    String,
  pub answers: Vec<AnswerChoice>,
}

impl QuizQuestion {
  /// Whether `chosen` exactly matches an answer marked correct.
  pub fn is_correct(&self, chosen: &str) -> bool {
    self.answers.iter().any(|a| a.is_correct && a.text == chosen)
  }
}

/// A quiz and its fully loaded questions, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSection {
  pub quiz:      Quiz,
  pub questions: Vec<QuizQuestion>,
}
