//! The page template and its four placeholder tokens.
//!
//! Tokens are replaced verbatim. There is no templating language: no loops,
//! no conditionals, and no escaping beyond what the fragments already carry.

use std::path::Path;

use crate::{Error, Result};

pub const TABS: &str = "{{tabs}}";
pub const DEFENCE_SECTION: &str = "{{defence_section}}";
pub const QUIZ_TABS: &str = "{{quizzes-tabs}}";
pub const QUIZ_SECTIONS: &str = "{{quiz-sections}}";

/// Template shipped with the crate; `seed` writes it out when the
/// configured template file does not exist yet.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/site_template.html");

/// Rendered HTML for each placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteFragments {
  pub tabs:             String,
  pub defence_sections: String,
  pub quiz_tabs:        String,
  pub quiz_sections:    String,
}

impl SiteFragments {
  fn for_token(&self, token: &str) -> Option<&str> {
    match token {
      TABS => Some(&self.tabs),
      DEFENCE_SECTION => Some(&self.defence_sections),
      QUIZ_TABS => Some(&self.quiz_tabs),
      QUIZ_SECTIONS => Some(&self.quiz_sections),
      _ => None,
    }
  }
}

pub fn load_template(path: &Path) -> Result<String> {
  std::fs::read_to_string(path).map_err(|source| Error::ReadTemplate {
    path: path.to_path_buf(),
    source,
  })
}

/// Replace every placeholder in `template` with its fragment.
///
/// Works in a single left-to-right pass, so a token that happens to appear
/// inside a fragment is left alone. Tokens absent from the template are
/// ignored.
pub fn assemble(template: &str, fragments: &SiteFragments) -> String {
  const TOKENS: [&str; 4] = [TABS, DEFENCE_SECTION, QUIZ_TABS, QUIZ_SECTIONS];

  let mut out = String::with_capacity(template.len());
  let mut rest = template;

  while let Some((pos, token)) = TOKENS
    .iter()
    .filter_map(|t| rest.find(t).map(|pos| (pos, *t)))
    .min_by_key(|(pos, _)| *pos)
  {
    out.push_str(&rest[..pos]);
    out.push_str(fragments.for_token(token).unwrap_or(token));
    rest = &rest[pos + token.len()..];
  }

  out.push_str(rest);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fragments() -> SiteFragments {
    SiteFragments {
      tabs:             "<T>".into(),
      defence_sections: "<D>".into(),
      quiz_tabs:        "<QT>".into(),
      quiz_sections:    "<QS>".into(),
    }
  }

  #[test]
  fn replaces_all_four_tokens() {
    let out = assemble(
      "a {{tabs}} b {{defence_section}} c {{quizzes-tabs}} d {{quiz-sections}} e",
      &fragments(),
    );
    assert_eq!(out, "a <T> b <D> c <QT> d <QS> e");
  }

  #[test]
  fn replaces_repeated_tokens() {
    let out = assemble("{{tabs}}|{{tabs}}", &fragments());
    assert_eq!(out, "<T>|<T>");
  }

  #[test]
  fn missing_tokens_and_unknown_braces_are_left_alone() {
    let out = assemble("<p>{{title}} {{tabs}}</p>", &fragments());
    assert_eq!(out, "<p>{{title}} <T></p>");
  }

  #[test]
  fn tokens_inside_fragments_are_not_expanded() {
    let f = SiteFragments {
      tabs: "{{quiz-sections}}".into(),
      ..fragments()
    };
    let out = assemble("{{tabs}} {{quiz-sections}}", &f);
    assert_eq!(out, "{{quiz-sections}} <QS>");
  }

  #[test]
  fn default_template_carries_every_token() {
    for token in [TABS, DEFENCE_SECTION, QUIZ_TABS, QUIZ_SECTIONS] {
      assert!(DEFAULT_TEMPLATE.contains(token), "missing {token}");
    }
  }

  #[test]
  fn missing_template_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_template(&dir.path().join("nope.html")).unwrap_err();
    assert!(matches!(err, Error::ReadTemplate { .. }));
  }
}
