//! ai-commit - CLI entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ai_commit::config::{ConfigKey, ConfigStore};
use ai_commit::generate::{self, GenerateOptions};
use ai_commit::git::{self, Git};
use ai_commit::ui::TerminalConfirm;

#[derive(Parser)]
#[command(name = "ai-commit")]
#[command(about = "Generate commit messages for staged changes using the Groq API")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a commit message for the staged changes (the default)
    Generate {
        /// Model identifier to use instead of the default
        #[arg(long)]
        model: Option<String>,
    },

    /// Set a configuration value
    #[command(name = "setConfig")]
    SetConfig {
        /// Configuration key (GROQ_APIKEY or COMMIT_PROMPT)
        #[arg(long)]
        key: String,

        /// Value to store
        #[arg(long)]
        value: String,
    },

    /// Print a configuration value
    #[command(name = "getConfig")]
    GetConfig {
        /// Configuration key (GROQ_APIKEY or COMMIT_PROMPT)
        #[arg(long)]
        key: String,
    },

    /// Print the configuration file path
    #[command(name = "getConfigPath")]
    GetConfigPath,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = ConfigStore::from_home().context("Could not locate the configuration file")?;

    match cli.command.unwrap_or(Command::Generate { model: None }) {
        Command::Generate { model } => {
            git::check_git_installed().context("git is required")?;

            let repo = Git::new();
            let options = GenerateOptions {
                model,
                ..Default::default()
            };
            generate::run(&store, &repo, &TerminalConfirm, options).await?;
        }
        Command::SetConfig { key, value } => {
            let key: ConfigKey = key.parse()?;
            store.set(key, &value)?;
            println!("Configuration updated: {key}={value}");
        }
        Command::GetConfig { key } => {
            let key: ConfigKey = key.parse()?;
            println!("{key}={}", store.get(key)?);
        }
        Command::GetConfigPath => {
            println!("Configuration file path: {}", store.path().display());
        }
    }

    Ok(())
}

/// Set up the tracing subscriber. `--verbose` forces debug output for this
/// crate; otherwise RUST_LOG applies, defaulting to warnings.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ai_commit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
