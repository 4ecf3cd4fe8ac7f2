use std::collections::HashMap;

use crate::domain::issue::{Issue, Project, Team};
use crate::domain::report::Report;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSection {
    pub project: Option<Project>,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSection {
    pub team: Option<Team>,
    pub projects: Vec<ProjectSection>,
    project_index: HashMap<Option<String>, usize>,
}

impl TeamSection {
    fn new(team: Option<Team>) -> Self {
        Self {
            team,
            projects: Vec::new(),
            project_index: HashMap::new(),
        }
    }

    fn push(&mut self, issue: Issue) {
        let key = issue.project_name().map(str::to_string);
        let position = match self.project_index.get(&key) {
            Some(position) => *position,
            None => {
                self.projects.push(ProjectSection {
                    project: issue.project.clone(),
                    issues: Vec::new(),
                });
                self.project_index.insert(key, self.projects.len() - 1);
                self.projects.len() - 1
            }
        };
        self.projects[position].issues.push(issue);
    }
}

/// Issues grouped by team, then by project. Groups and issues keep the
/// order in which they were first seen; teams and projects are matched by
/// name, and a missing team or project is a group of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Changelog {
    pub teams: Vec<TeamSection>,
    team_index: HashMap<Option<String>, usize>,
}

impl Changelog {
    pub fn from_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let mut changelog = Self::default();
        for issue in issues {
            changelog.push(issue);
        }
        changelog
    }

    pub fn push(&mut self, issue: Issue) {
        let key = issue.team_name().map(str::to_string);
        let position = match self.team_index.get(&key) {
            Some(position) => *position,
            None => {
                self.teams.push(TeamSection::new(issue.team.clone()));
                self.team_index.insert(key, self.teams.len() - 1);
                self.teams.len() - 1
            }
        };
        self.teams[position].push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues().count()
    }

    /// All issues in document order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.teams
            .iter()
            .flat_map(|team| team.projects.iter())
            .flat_map(|project| project.issues.iter())
    }
}

impl From<Report> for Changelog {
    fn from(report: Report) -> Self {
        Self::from_issues(report.issues)
    }
}
