//! Defences and the case law filed under them.

use serde::{Deserialize, Serialize};

pub type DefenceId = i64;
pub type LawCaseId = i64;

/// A legal defence. `defence_type` is stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defence {
  pub defence_id:         DefenceId,
  pub defence_type:       String,
  pub has_essay_question: bool,
}

impl Defence {
  /// Element id used by the tab and section pair for this defence.
  pub fn slug(&self) -> String { slug(&self.defence_type) }

  /// Human-facing label, e.g. `SELF-DEFENCE` becomes `Self-Defence`.
  pub fn label(&self) -> String { title_case(&self.defence_type) }
}

/// A case to be inserted under an existing defence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLawCase {
  pub defence_id: DefenceId,
  pub case_name:  String,
  pub case_text:  String,
}

impl NewLawCase {
  pub fn new(
    defence_id: DefenceId,
    case_name: impl Into<String>,
    case_text: impl Into<String>,
  ) -> Self {
    Self {
      defence_id,
      case_name: case_name.into(),
      case_text: case_text.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawCase {
  pub law_case_id: LawCaseId,
  pub defence_id:  DefenceId,
  pub case_name:   String,
  pub case_text:   String,
}

/// A defence together with every case it owns, fetched up front so that
/// rendering never goes back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefenceCases {
  pub defence: Defence,
  pub cases:   Vec<LawCase>,
}

impl DefenceCases {
  /// Group `cases` under the defence that owns them, keeping the order of
  /// both inputs. Cases whose defence is not in `defences` are dropped.
  pub fn group(defences: Vec<Defence>, cases: &[LawCase]) -> Vec<Self> {
    defences
      .into_iter()
      .map(|defence| {
        let cases = cases
          .iter()
          .filter(|c| c.defence_id == defence.defence_id)
          .cloned()
          .collect();
        Self { defence, cases }
      })
      .collect()
  }
}

/// Lower-case `text` and replace spaces with hyphens.
pub fn slug(text: &str) -> String { text.to_lowercase().replace(' ', "-") }

/// Capitalise the first letter of every run of letters and lower-case the
/// rest. Any non-alphabetic character starts a new word.
pub fn title_case(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut in_word = false;
  for ch in text.chars() {
    if ch.is_alphabetic() {
      if in_word {
        out.extend(ch.to_lowercase());
      } else {
        out.extend(ch.to_uppercase());
      }
      in_word = true;
    } else {
      out.push(ch);
      in_word = false;
    }
  }
  out
}
