use std::io::{self, IsTerminal};

use thiserror::Error;
use tracing::info;

use crate::commands::base_commands::ChangelogArgs;
use crate::domain::month::{MonthWindow, WindowError};
use crate::services::changelog::Changelog;
use crate::services::changelog_markdown::{render_changelog, render_title};
use crate::services::changelog_query::ChangelogQuery;
use crate::services::data_source::{DataSourceError, IssueSource};
use crate::services::linear_api::{AuthData, LinearApiClient, LinearConfig, LinearConfigParser};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    #[error("no Linear API key: pass --api-key, set api_key in the config or LINEAR_API_KEY")]
    MissingApiKey,
    #[error("failed to read API key: {0}")]
    Prompt(#[from] io::Error),
}

/// Builds the full changelog document: title line followed by the grouped issues.
pub fn run_changelog(args: &ChangelogArgs) -> Result<String, CommandError> {
    let config = match &args.config {
        Some(path) => LinearConfigParser.parse(path)?,
        None => LinearConfig::default(),
    };
    let window = MonthWindow::for_month(args.year, args.month)?;
    let auth = resolve_auth(args.api_key.as_deref(), &config)?;
    let query = ChangelogQuery::new(&window)
        .with_source_type(config.source_type.clone())
        .with_state(config.state.clone());
    let client = LinearApiClient::new(config, auth)?;

    Ok(draft_changelog(&client, &window, &query)?)
}

pub fn draft_changelog(
    source: &dyn IssueSource,
    window: &MonthWindow,
    query: &ChangelogQuery,
) -> Result<String, DataSourceError> {
    let report = source.fetch_report(query)?;
    let changelog = Changelog::from(report);
    info!(
        teams = changelog.teams.len(),
        issues = changelog.issue_count(),
        "grouped changelog"
    );
    Ok(format!(
        "{}\n{}",
        render_title(window),
        render_changelog(&changelog)
    ))
}

fn resolve_auth(api_key: Option<&str>, config: &LinearConfig) -> Result<AuthData, CommandError> {
    if let Some(api_key) = api_key.or(config.api_key.as_deref()) {
        return Ok(AuthData {
            api_key: api_key.to_string(),
        });
    }
    if let Ok(auth) = AuthData::from_env() {
        return Ok(auth);
    }
    if !io::stdin().is_terminal() {
        return Err(CommandError::MissingApiKey);
    }

    let api_key = rpassword::prompt_password("Api key: ")?;
    if api_key.trim().is_empty() {
        return Err(CommandError::MissingApiKey);
    }
    Ok(AuthData { api_key })
}
