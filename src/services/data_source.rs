use crate::domain::report::Report;
use crate::services::changelog_query::ChangelogQuery;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("resource not found")]
    NotFound,
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
    #[error("unauthorized")]
    Unauthorized,
    #[error("query failed: {}", .0.join("; "))]
    Query(Vec<String>),
    #[error("{0}")]
    Other(String),
}

/// Executes a changelog query and returns the complete result.
pub trait IssueSource {
    fn fetch_report(&self, query: &ChangelogQuery) -> Result<Report, DataSourceError>;
}
