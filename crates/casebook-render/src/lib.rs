//! HTML fragments for the casebook site.
//!
//! Every function here is pure: it takes rows already fetched from a
//! [`CaseStore`](casebook_core::CaseStore) and returns a [`Markup`] fragment.
//! Fragments are built with `maud`, so all interpolated text, including
//! attribute values, is HTML-escaped.

pub mod defence;
pub mod quiz;
pub mod score;
pub mod tables;

pub use maud::Markup;

pub use defence::{render_case_list, render_defence_sections, render_defence_tabs};
pub use quiz::{
  render_quiz_questions, render_quiz_results, render_quiz_sections, render_quiz_tabs,
};
pub use score::score_quiz;
pub use tables::{render_score_table, render_user_table};

use maud::html;

/// A tab button that asks the page script to show the section `slug`.
///
/// The slug travels in `data-tab` so it is never spliced into script text.
pub(crate) fn tab_button(slug: &str, label: &str) -> Markup {
  html! {
    button.btn data-tab=(slug) onclick="openTab(this.dataset.tab)" { (label) }
    " "
  }
}
