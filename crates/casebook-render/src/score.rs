//! Marking submitted quiz answers.

use std::collections::HashMap;

use casebook_core::quiz::QuizQuestion;

/// Count the questions whose chosen answer exactly matches a correct answer.
///
/// `user_answers` maps 1-based question numbers to the chosen answer text.
/// Unanswered questions score nothing. Comparison is exact: no trimming and
/// no case folding.
pub fn score_quiz(user_answers: &HashMap<usize, String>, questions: &[QuizQuestion]) -> usize {
  questions
    .iter()
    .enumerate()
    .filter(|(idx, question)| {
      user_answers
        .get(&(idx + 1))
        .is_some_and(|chosen| question.is_correct(chosen))
    })
    .count()
}

#[cfg(test)]
mod tests {
  use casebook_core::quiz::AnswerChoice;

  use super::*;

  fn question(correct: &str, wrong: &[&str]) -> QuizQuestion {
    let mut answers = vec![AnswerChoice { text: correct.into(), is_correct: true }];
    answers.extend(
      wrong
        .iter()
        .map(|w| AnswerChoice { text: (*w).into(), is_correct: false }),
    );
    QuizQuestion { text: format!("Pick {correct}"), answers }
  }

  fn quiz() -> Vec<QuizQuestion> {
    vec![
      question("alpha", &["beta", "gamma"]),
      question("delta", &["epsilon"]),
      question("zeta", &["eta", "theta"]),
    ]
  }

  fn answers(pairs: &[(usize, &str)]) -> HashMap<usize, String> {
    pairs.iter().map(|(i, a)| (*i, (*a).to_string())).collect()
  }

  #[test]
  fn all_correct_scores_every_question() {
    let picks = answers(&[(1, "alpha"), (2, "delta"), (3, "zeta")]);
    assert_eq!(score_quiz(&picks, &quiz()), 3);
  }

  #[test]
  fn empty_submission_scores_zero() {
    assert_eq!(score_quiz(&HashMap::new(), &quiz()), 0);
  }

  #[test]
  fn wrong_and_missing_answers_score_nothing() {
    let picks = answers(&[(1, "beta"), (3, "zeta")]);
    assert_eq!(score_quiz(&picks, &quiz()), 1);
  }

  #[test]
  fn matching_is_exact() {
    let picks = answers(&[(1, "Alpha"), (2, " delta"), (3, "zeta ")]);
    assert_eq!(score_quiz(&picks, &quiz()), 0);
  }

  #[test]
  fn indices_are_one_based() {
    let picks = answers(&[(0, "alpha"), (4, "zeta")]);
    assert_eq!(score_quiz(&picks, &quiz()), 0);
  }

  #[test]
  fn duplicate_correct_answers_count_once() {
    let q = QuizQuestion {
      text:    "Twice?".into(),
      answers: vec![
        AnswerChoice { text: "yes".into(), is_correct: true },
        AnswerChoice { text: "yes".into(), is_correct: true },
      ],
    };
    assert_eq!(score_quiz(&answers(&[(1, "yes")]), &[q]), 1);
  }

  #[test]
  fn empty_quiz_scores_zero() {
    assert_eq!(score_quiz(&answers(&[(1, "alpha")]), &[]), 0);
  }
}
