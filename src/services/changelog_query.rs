use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::domain::month::MonthWindow;

/// Attachment source type of issues linked to a commit or pull request.
pub const GITHUB_SOURCE_TYPE: &str = "github";

pub const ISSUES_QUERY: &str = r#"query Changelog($filter: IssueFilter) {
  issues(filter: $filter) {
    nodes {
      assignee {
        name
        email
      }
      url
      title
      team {
        name
      }
      project {
        name
        lead {
          email
        }
      }
    }
  }
}"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub source_type: String,
    pub state: Option<String>,
}

impl ChangelogQuery {
    pub fn new(window: &MonthWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
            source_type: GITHUB_SOURCE_TYPE.to_string(),
            state: None,
        }
    }

    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = source_type.into();
        self
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }

    pub fn filter(&self) -> Value {
        let mut filter = json!({
            "completedAt": {
                "gte": format_date(self.start),
                "lt": format_date(self.end),
            },
            "attachments": {
                "sourceType": { "eq": self.source_type },
            },
        });
        if let Some(state) = &self.state {
            filter["state"] = json!({ "name": { "eq": state } });
        }
        filter
    }

    pub fn request_body(&self) -> Value {
        json!({
            "query": ISSUES_QUERY,
            "variables": { "filter": self.filter() },
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
