//! Commit message composition for staged diffs.

pub mod generator;
pub mod prompt;

pub use generator::{CommitMessageGenerator, DEFAULT_MODEL};
pub use prompt::{DEFAULT_PROMPT, build_messages};
