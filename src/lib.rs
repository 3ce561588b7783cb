//! ai-commit - generate commit messages for staged changes with the Groq API.
//!
//! # Overview
//!
//! ai-commit inspects the git index, offers to stage pending changes, sends
//! the staged diff to the Groq chat-completions API, and commits with the
//! returned message once the user approves it. Configuration (the API key
//! and an optional custom prompt) lives in a JSON file in the user's home
//! directory.

pub mod commit;
pub mod config;
pub mod error;
pub mod generate;
pub mod git;
pub mod groq;
pub mod ui;

// Re-export commonly used types
pub use commit::{CommitMessageGenerator, DEFAULT_MODEL, DEFAULT_PROMPT};
pub use config::{ConfigKey, ConfigStore};
pub use error::{CompletionError, ConfigError, GenerateError, GitError};
pub use git::{ChangeKind, FileStatus, Git, GitExecutor, SystemGit};
pub use groq::{Client, Message, Role};
pub use ui::{Confirm, TerminalConfirm};
