//! Error types for ai-commit modules using thiserror.

use thiserror::Error;

/// Errors from git subprocess operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error(
        "Git not found in PATH. Install it from https://git-scm.com/downloads and try again"
    )]
    NotInstalled,

    #[error("Not a git repository. Run ai-commit from inside a working tree")]
    NotARepository,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("`{command}` exited with code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("No changes detected in the working tree")]
    NoChanges,

    #[error("No staged files. Stage your changes or accept staging when prompted")]
    NothingStaged,

    #[error("Failed to stage changes: {0}")]
    StageFailed(#[source] Box<GitError>),
}

/// Errors from the configuration store.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key: {key}. Expected GROQ_APIKEY or COMMIT_PROMPT")]
    UnknownKey { key: String },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Failed to read configuration file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write configuration file: {0}")]
    Write(#[source] std::io::Error),
}

/// Errors from the Groq completion client.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error(
        "GROQ_APIKEY is not configured. Run: ai-commit setConfig --key GROQ_APIKEY --value <key>"
    )]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Completion API returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Completion API returned no message")]
    EmptyResponse,
}

/// Errors from the end-to-end generate flow.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(
        "No changes detected in the staged files. Please make some changes before generating a commit message"
    )]
    NoStagedChanges,
}
