use serde::Deserialize;

use crate::domain::issue::Issue;

/// Flat query result, in the order the tracker returned it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub issues: Vec<Issue>,
}

#[derive(Deserialize)]
struct IssueConnection {
    nodes: Vec<Issue>,
}

#[derive(Deserialize)]
struct ReportPayload {
    issues: IssueConnection,
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let payload = ReportPayload::deserialize(deserializer)?;
        Ok(Report {
            issues: payload.issues.nodes,
        })
    }
}
