//! Site assembly: fetch everything once, render, substitute, write.

use std::path::Path;

use casebook_core::{defence::DefenceCases, quiz::QuizSection, store::CaseStore};
use casebook_render::{
  render_defence_sections, render_defence_tabs, render_quiz_sections, render_quiz_tabs,
};

use crate::{
  Error, Result,
  template::{SiteFragments, assemble, load_template},
};

/// Render the four page fragments from the current store contents.
///
/// Defences and their cases are fetched up front and grouped in memory.
/// Quiz sections are built from the quiz rows themselves, one nested
/// question/answer load per quiz.
pub fn render_site<S: CaseStore>(store: &S) -> Result<SiteFragments, S::Error> {
  let defences = store.all_defences()?;
  let cases = store.all_law_cases()?;
  let quizzes = store.all_quizzes()?;

  let quiz_sections = quizzes
    .iter()
    .map(|quiz| {
      Ok(QuizSection {
        quiz:      quiz.clone(),
        questions: store.quiz_with_questions_answers(quiz.quiz_id)?,
      })
    })
    .collect::<Result<Vec<_>, S::Error>>()?;

  let tabs = render_defence_tabs(&defences).into_string();
  let defence_sections =
    render_defence_sections(&DefenceCases::group(defences, &cases)).into_string();

  Ok(SiteFragments {
    tabs,
    defence_sections,
    quiz_tabs: render_quiz_tabs(&quizzes).into_string(),
    quiz_sections: render_quiz_sections(&quiz_sections).into_string(),
  })
}

/// Generate the site page at `output_path` from the template at
/// `template_path`, then close the store.
///
/// The store is consumed: it is closed explicitly on success and dropped
/// (which also closes it) on any earlier error.
pub fn generate<S: CaseStore>(store: S, template_path: &Path, output_path: &Path) -> Result<()> {
  let template = load_template(template_path)?;
  let fragments = render_site(&store).map_err(Error::store)?;
  let page = assemble(&template, &fragments);

  std::fs::write(output_path, page).map_err(|source| Error::WriteOutput {
    path: output_path.to_path_buf(),
    source,
  })?;

  store.close().map_err(Error::store)?;
  tracing::info!(output = %output_path.display(), "website generated");
  Ok(())
}
