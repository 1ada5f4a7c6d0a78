//! Sample data used to reset a development store.

use casebook_core::{defence::NewLawCase, quiz::NewAnswer, store::CaseStore};

const AUTOMATISM_CASES: [(&str, &str); 3] = [
  (
    "Hill v Baxter (1958)",
    "Automatism must be caused by an external factor, e.g., being attacked by bees.",
  ),
  (
    "R v T (1990)",
    "Exceptional stress from external trauma can trigger automatism.",
  ),
  (
    "AG’s Ref (No.2 of 1992)",
    "Partial loss of control is not sufficient for automatism.",
  ),
];

const QUIZ_TITLE: &str = "Automatism Basics";
const QUIZ_LINK: &str = "quiz/automatism";
const QUESTION: &str = "Which factor can trigger automatism?";
const ANSWERS: [(&str, bool); 3] = [
  ("External factors like a swarm of bees", true),
  ("Any minor distraction", false),
  ("Internal factors only", false),
];

const USER: (&str, &str) = ("Patrycja", "patrycja@example.com");
const USER_SCORE: i64 = 80;

/// Drop and recreate the schema, then insert the sample data set.
pub fn seed<S: CaseStore>(store: &S) -> Result<(), S::Error> {
  store.reset()?;
  tracing::info!("schema reset");

  let automatism = store.add_defence("AUTOMATISM", false)?;
  store.add_defence("INSANITY", true)?;
  store.add_defence("SELF-DEFENCE", false)?;

  let cases: Vec<_> = AUTOMATISM_CASES
    .iter()
    .map(|(name, text)| NewLawCase::new(automatism, *name, *text))
    .collect();
  store.add_law_cases(&cases)?;

  let quiz_id = store.add_quiz(automatism, QUIZ_TITLE, Some(QUIZ_LINK))?;
  let question_id = store.add_question(quiz_id, automatism, QUESTION)?;
  let answers: Vec<_> = ANSWERS
    .iter()
    .map(|(text, correct)| NewAnswer::new(question_id, *text, *correct))
    .collect();
  store.add_answers(&answers)?;

  let user_id = store.add_user(USER.0, USER.1)?;
  store.add_score(user_id, quiz_id, USER_SCORE)?;

  tracing::info!(cases = cases.len(), quiz_id, user_id, "sample data seeded");
  Ok(())
}
