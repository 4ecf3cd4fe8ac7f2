use std::env;
use std::fs;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::report::Report;
use crate::services::changelog_query::{ChangelogQuery, GITHUB_SOURCE_TYPE};
use crate::services::data_source::{DataSourceError, IssueSource};

pub const LINEAR_ENDPOINT: &str = "https://api.linear.app/graphql";
pub const API_KEY_ENV: &str = "LINEAR_API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub source_type: String,
    pub state: Option<String>,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            endpoint: LINEAR_ENDPOINT.to_string(),
            api_key: None,
            source_type: GITHUB_SOURCE_TYPE.to_string(),
            state: None,
        }
    }
}

impl LinearConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, DataSourceError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| DataSourceError::Other(format!("failed to read config: {err}")))?;
        let config: LinearConfig =
            serde_yaml::from_str(&contents).map_err(|_| DataSourceError::Parse)?;
        Ok(config)
    }
}

pub struct LinearConfigParser;

impl LinearConfigParser {
    pub fn parse(&self, filepath: &str) -> Result<LinearConfig, DataSourceError> {
        LinearConfig::from_yaml_file(filepath)
    }
}

#[derive(Debug, Clone)]
pub struct AuthData {
    pub api_key: String,
}

impl AuthData {
    pub fn from_env() -> Result<Self, DataSourceError> {
        match env::var(API_KEY_ENV) {
            Ok(api_key) if !api_key.is_empty() => Ok(Self { api_key }),
            _ => Err(DataSourceError::Unauthorized),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQLError>>,
}

impl<T: DeserializeOwned> GraphQLResponse<T> {
    fn into_data(self) -> Result<T, DataSourceError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(DataSourceError::Query(
                errors.into_iter().map(|error| error.message).collect(),
            ));
        }
        self.data.ok_or(DataSourceError::Parse)
    }
}

pub struct LinearApiClient {
    config: LinearConfig,
    auth: AuthData,
    client: Client,
}

impl LinearApiClient {
    pub fn new(config: LinearConfig, auth: AuthData) -> Result<Self, DataSourceError> {
        if config.endpoint.is_empty() {
            return Err(DataSourceError::Other(
                "linear config is missing endpoint".to_string(),
            ));
        }
        if auth.api_key.is_empty() {
            return Err(DataSourceError::Unauthorized);
        }

        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|err| DataSourceError::Other(format!("failed to build http client: {err}")))?;

        Ok(Self {
            config,
            auth,
            client,
        })
    }

    fn post_graphql<T: DeserializeOwned>(
        &self,
        body: &serde_json::Value,
    ) -> Result<T, DataSourceError> {
        debug!(endpoint = %self.config.endpoint, "sending graphql request");
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, &self.auth.api_key)
            .json(body)
            .send()
            .map_err(|err| {
                debug!(error = %err, "graphql request failed");
                DataSourceError::Connection
            })?;

        let status = response.status();
        debug!(%status, "graphql response received");
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DataSourceError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(DataSourceError::NotFound);
        }

        let text = response.text().map_err(|_| DataSourceError::Connection)?;
        match serde_json::from_str::<GraphQLResponse<T>>(&text) {
            Ok(payload) => match payload.into_data() {
                // A data payload on an error status is still a failed request.
                Ok(_) if !status.is_success() => Err(DataSourceError::Connection),
                result => result,
            },
            Err(_) if !status.is_success() => Err(DataSourceError::Connection),
            Err(err) => {
                debug!(error = %err, "graphql response did not match the report shape");
                Err(DataSourceError::Parse)
            }
        }
    }
}

impl IssueSource for LinearApiClient {
    fn fetch_report(&self, query: &ChangelogQuery) -> Result<Report, DataSourceError> {
        let report: Report = self.post_graphql(&query.request_body())?;
        info!(issues = report.issues.len(), "fetched completed issues");
        Ok(report)
    }
}
