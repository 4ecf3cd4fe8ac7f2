pub mod base_commands;
pub mod changelog_cmd;
pub mod completions_cmd;
