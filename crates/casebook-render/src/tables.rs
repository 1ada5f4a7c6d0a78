//! Admin tables for users and recorded scores.

use casebook_core::user::{Score, User};
use maud::{Markup, html};

pub fn render_user_table(users: &[User]) -> Markup {
  html! {
    table.user-table {
      thead { tr { th { "ID" } th { "Name" } th { "Email" } } }
      tbody {
        @for user in users {
          tr { td { (user.user_id) } td { (user.name) } td { (user.email) } }
        }
      }
    }
  }
}

pub fn render_score_table(scores: &[Score]) -> Markup {
  html! {
    table.score-table {
      thead {
        tr {
          th { "Score ID" } th { "User ID" } th { "Quiz ID" } th { "Score" } th { "Date Taken" }
        }
      }
      tbody {
        @for score in scores {
          tr {
            td { (score.score_id) }
            td { (score.user_id) }
            td { (score.quiz_id) }
            td { (score.score_value) }
            td { (score.date_taken.to_string()) }
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn user_table_has_one_row_per_user() {
    let html = render_user_table(&[
      User { user_id: 1, name: "Patrycja".into(), email: "patrycja@example.com".into() },
      User { user_id: 2, name: "O'Brien <admin>".into(), email: "ob@example.com".into() },
    ])
    .into_string();

    assert!(html.starts_with(r#"<table class="user-table">"#), "{html}");
    assert_eq!(html.matches("<tr>").count(), 3);
    assert!(html.contains("<td>1</td><td>Patrycja</td><td>patrycja@example.com</td>"));
    assert!(html.contains("O'Brien &lt;admin&gt;"), "{html}");
  }

  #[test]
  fn empty_user_table_keeps_header() {
    let html = render_user_table(&[]).into_string();
    assert!(html.contains("<th>Email</th>"));
    assert!(html.contains("<tbody></tbody>"));
  }

  #[test]
  fn score_table_formats_date() {
    let date_taken = NaiveDate::from_ymd_opt(2024, 3, 9)
      .unwrap()
      .and_hms_opt(14, 5, 59)
      .unwrap();
    let html = render_score_table(&[Score {
      score_id: 7,
      user_id: 1,
      quiz_id: 2,
      score_value: 80,
      date_taken,
    }])
    .into_string();

    assert!(
      html.contains("<td>7</td><td>1</td><td>2</td><td>80</td><td>2024-03-09 14:05:59</td>"),
      "{html}"
    );
  }
}
