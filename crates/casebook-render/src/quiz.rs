//! Quiz tabs, question blocks, quiz sections and the score banner.

use casebook_core::quiz::{Quiz, QuizQuestion, QuizSection};
use maud::{Markup, html};

use crate::tab_button;

pub fn render_quiz_tabs(quizzes: &[Quiz]) -> Markup {
  html! {
    @for quiz in quizzes {
      (tab_button(&quiz.slug(), &quiz.label()))
    }
  }
}

/// One block per question, numbered from 1. Each question's answers form a
/// radio group named `q<n>` whose values are the answer texts.
pub fn render_quiz_questions(questions: &[QuizQuestion]) -> Markup {
  html! {
    @for (idx, question) in questions.iter().enumerate() {
      @let n = idx + 1;
      div.quiz-question {
        h4 { "Q" (n) ". " (question.text) }
        ul.answers {
          @for answer in &question.answers {
            li {
              label {
                input type="radio" name=(format!("q{n}")) value=(answer.text);
                " " (answer.text)
              }
            }
          }
        }
      }
    }
  }
}

pub fn render_quiz_results(score: usize, total_questions: usize) -> Markup {
  html! {
    div.quiz-results {
      h3 { "Your Score: " (score) "/" (total_questions) }
    }
  }
}

/// One tab section per quiz, addressable by the slug used in
/// [`render_quiz_tabs`].
pub fn render_quiz_sections(sections: &[QuizSection]) -> Markup {
  html! {
    @for entry in sections {
      section.tab-content.quiz-section id=(entry.quiz.slug()) {
        h2 { (entry.quiz.label()) }
        form.quiz-form data-quiz-id=(entry.quiz.quiz_id) {
          (render_quiz_questions(&entry.questions))
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use casebook_core::quiz::AnswerChoice;

  use super::*;

  fn quiz(id: i64, title: &str) -> Quiz {
    Quiz { quiz_id: id, defence_id: 1, title: title.into(), link: None }
  }

  fn question(text: &str, answers: &[(&str, bool)]) -> QuizQuestion {
    QuizQuestion {
      text:    text.into(),
      answers: answers
        .iter()
        .map(|(t, c)| AnswerChoice { text: (*t).into(), is_correct: *c })
        .collect(),
    }
  }

  #[test]
  fn quiz_tabs_are_keyed_by_title_slug() {
    let html = render_quiz_tabs(&[quiz(1, "Automatism Basics")]).into_string();
    assert!(html.contains(r#"data-tab="automatism-basics""#), "{html}");
    assert!(html.contains(">Automatism Basics</button>"), "{html}");
  }

  #[test]
  fn questions_are_numbered_from_one_with_grouped_radios() {
    let html = render_quiz_questions(&[
      question("First?", &[("A", true), ("B", false)]),
      question("Second?", &[("C", false), ("D", true)]),
    ])
    .into_string();

    assert!(html.contains("<h4>Q1. First?</h4>"), "{html}");
    assert!(html.contains("<h4>Q2. Second?</h4>"), "{html}");
    assert_eq!(html.matches(r#"name="q1""#).count(), 2);
    assert_eq!(html.matches(r#"name="q2""#).count(), 2);
    assert!(html.contains(r#"value="D""#), "{html}");
  }

  #[test]
  fn answer_values_are_quoted_and_escaped() {
    let html = render_quiz_questions(&[question(
      "Pick one",
      &[(r#"External factors like "bees" & wasps"#, true)],
    )])
    .into_string();

    assert!(
      html.contains(r#"value="External factors like &quot;bees&quot; &amp; wasps""#),
      "{html}"
    );
    assert!(!html.contains(r#""bees""#), "{html}");
  }

  #[test]
  fn correctness_is_not_leaked_into_markup() {
    let html = render_quiz_questions(&[question("Q", &[("right", true), ("wrong", false)])])
      .into_string();
    assert!(!html.contains("true"));
    assert!(!html.contains("correct"));
  }

  #[test]
  fn results_banner() {
    let html = render_quiz_results(3, 5).into_string();
    assert!(html.contains("<h3>Your Score: 3/5</h3>"), "{html}");
    assert!(html.contains(r#"class="quiz-results""#), "{html}");
  }

  #[test]
  fn quiz_sections_render_each_quiz_with_its_questions() {
    let html = render_quiz_sections(&[
      QuizSection {
        quiz:      quiz(1, "Automatism Basics"),
        questions: vec![question("Which factor?", &[("External", true)])],
      },
      QuizSection { quiz: quiz(2, "Insanity"), questions: vec![] },
    ])
    .into_string();

    assert!(html.contains(r#"id="automatism-basics""#), "{html}");
    assert!(html.contains(r#"id="insanity""#), "{html}");
    assert!(html.contains(r#"data-quiz-id="1""#), "{html}");
    assert!(html.contains("Q1. Which factor?"), "{html}");
    assert_eq!(html.matches("quiz-question").count(), 1);
  }
}
