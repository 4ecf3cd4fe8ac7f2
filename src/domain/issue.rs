use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignee {
	pub name: String,
	pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
	pub name: String,
	/// Carried through from the tracker, never rendered.
	#[serde(default)]
	pub lead: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Issue {
	#[serde(default)]
	pub assignee: Option<Assignee>,
	#[serde(default)]
	pub url: Option<String>,
	pub title: String,
	#[serde(default)]
	pub team: Option<Team>,
	#[serde(default)]
	pub project: Option<Project>,
}

impl Issue {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			assignee: None,
			url: None,
			title: title.into(),
			team: None,
			project: None,
		}
	}

	pub fn team_name(&self) -> Option<&str> {
		self.team.as_ref().map(|team| team.name.as_str())
	}

	pub fn project_name(&self) -> Option<&str> {
		self.project.as_ref().map(|project| project.name.as_str())
	}
}
