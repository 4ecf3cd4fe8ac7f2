use std::process::ExitCode;

use changelog_draft::commands::base_commands::{CliArgs, Commands};
use changelog_draft::commands::changelog_cmd::run_changelog;
use changelog_draft::commands::completions_cmd::completions_command;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse();
    match args.command {
        Some(Commands::Completions { shell }) => {
            completions_command(shell);
            ExitCode::SUCCESS
        }
        None => match run_changelog(&args.changelog) {
            Ok(document) => {
                println!("{document}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to draft changelog: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

// Logs go to stderr so stdout carries only the document.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
