use crate::domain::issue::{Issue, Project, Team};
use crate::domain::month::MonthWindow;
use crate::services::changelog::{Changelog, ProjectSection, TeamSection};

pub const NO_TEAM: &str = "No team";
pub const NO_PROJECT: &str = "No project";

// Markdown hard line break between team sections.
const TEAM_SEPARATOR: &str = "  \n";

pub fn render_title(window: &MonthWindow) -> String {
    format!("# Changelog draft {} {}", window.month_name(), window.year)
}

pub fn render_changelog(changelog: &Changelog) -> String {
    changelog
        .teams
        .iter()
        .map(render_team_section)
        .collect::<Vec<_>>()
        .join(TEAM_SEPARATOR)
}

fn render_team_section(section: &TeamSection) -> String {
    let mut output = team_heading(section.team.as_ref());
    for project in &section.projects {
        output.push_str(&render_project_section(project));
    }
    output
}

fn render_project_section(section: &ProjectSection) -> String {
    let mut output = project_heading(section.project.as_ref());
    for issue in &section.issues {
        output.push_str(&issue_item(issue));
    }
    output
}

fn team_heading(team: Option<&Team>) -> String {
    let name = team.map(|team| team.name.as_str()).unwrap_or(NO_TEAM);
    format!("## {name}\n")
}

fn project_heading(project: Option<&Project>) -> String {
    let name = project.map(|project| project.name.as_str()).unwrap_or(NO_PROJECT);
    format!("### {name}\n")
}

fn issue_item(issue: &Issue) -> String {
    let title = match &issue.url {
        Some(url) => format!("[{}]({url})", issue.title),
        None => issue.title.clone(),
    };
    let assignee = match &issue.assignee {
        Some(assignee) => format!(" @{}", assignee.name),
        None => String::new(),
    };
    format!("* {title}{assignee}\n")
}
