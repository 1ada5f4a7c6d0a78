//! Defence tabs, defence sections, and case lists.

use casebook_core::defence::{Defence, DefenceCases, LawCase};
use maud::{Markup, html};

use crate::tab_button;

/// One `<li>` per case, in input order: bold case name, then its text.
pub fn render_case_list(cases: &[LawCase]) -> Markup {
  html! {
    @for case in cases {
      li { strong { (case.case_name) } ": " (case.case_text) }
    }
  }
}

pub fn render_defence_tabs(defences: &[Defence]) -> Markup {
  html! {
    @for defence in defences {
      (tab_button(&defence.slug(), &defence.label()))
    }
  }
}

/// One tab section per defence holding its case list. The section id
/// matches the slug used by [`render_defence_tabs`].
pub fn render_defence_sections(defences: &[DefenceCases]) -> Markup {
  html! {
    @for entry in defences {
      section.tab-content.defence-section id=(entry.defence.slug()) {
        h2 { (entry.defence.label()) }
        ul { (render_case_list(&entry.cases)) }
      }
    }
  }
}
