use std::cell::RefCell;

use chrono::NaiveDate;

use crate::domain::issue::{Issue, Project, Team};
use crate::domain::report::Report;
use crate::services::changelog_query::ChangelogQuery;
use crate::services::data_source::{DataSourceError, IssueSource};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_issue(title: &str, team: Option<&str>, project: Option<&str>) -> Issue {
    let mut issue = Issue::new(title);
    issue.team = team.map(|name| Team {
        name: name.to_string(),
    });
    issue.project = project.map(|name| Project {
        name: name.to_string(),
        lead: None,
    });
    issue
}

// An IssueSource that replays a fixed result and records what it was asked.
pub struct CannedSource {
    result: Result<Report, Vec<String>>,
    queries: RefCell<Vec<ChangelogQuery>>,
}

impl CannedSource {
    pub fn with_report(report: Report) -> Self {
        Self {
            result: Ok(report),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self::with_report(Report { issues })
    }

    pub fn failing(errors: Vec<String>) -> Self {
        Self {
            result: Err(errors),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn received_queries(&self) -> Vec<ChangelogQuery> {
        self.queries.borrow().clone()
    }
}

impl IssueSource for CannedSource {
    fn fetch_report(&self, query: &ChangelogQuery) -> Result<Report, DataSourceError> {
        self.queries.borrow_mut().push(query.clone());
        self.result.clone().map_err(DataSourceError::Query)
    }
}
