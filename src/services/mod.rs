pub mod changelog;
pub mod changelog_markdown;
pub mod changelog_query;
pub mod data_source;
pub mod linear_api;
