use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(flatten)]
    pub changelog: ChangelogArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Draft the changelog of one calendar month from completed Linear issues
#[derive(Args, Debug, Clone)]
pub struct ChangelogArgs {
    /// Changelog year
    #[arg(short, long, default_value_t = current_year())]
    pub year: i32,
    /// Changelog month (1-12)
    #[arg(short, long, default_value_t = current_month())]
    pub month: u32,
    /// Linear API key, prompted for when not given here, in the config or in LINEAR_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,
    /// Path to Linear config YAML
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn current_year() -> i32 {
    Local::now().date_naive().year()
}

fn current_month() -> u32 {
    Local::now().date_naive().month()
}
