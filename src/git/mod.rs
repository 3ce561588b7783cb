//! Git operations for the commit flow.
//!
//! All repository interaction goes through [`Git`], which wraps a
//! [`GitExecutor`] so flows and parsing can be exercised against scripted
//! output instead of a real working tree.

pub mod executor;
pub mod status;

pub use executor::{GitExecutor, SystemGit, check_git_installed};
pub use status::{ChangeKind, FileStatus};

use crate::error::GitError;
use crate::ui::Confirm;

/// Handle for running git operations through an executor.
pub struct Git {
    exec: Box<dyn GitExecutor>,
}

impl Git {
    /// Handle backed by the system `git` binary in the process cwd.
    pub fn new() -> Self {
        Self::with_executor(Box::new(SystemGit::new()))
    }

    /// Handle with a custom executor.
    pub fn with_executor(exec: Box<dyn GitExecutor>) -> Self {
        Self { exec }
    }

    /// Check that the working directory is inside a git repository.
    pub async fn assert_repository(&self) -> Result<(), GitError> {
        self.exec
            .run(&["rev-parse", "--is-inside-work-tree"])
            .await
            .map(|_| ())
            .map_err(|_| GitError::NotARepository)
    }

    /// List the files currently staged for commit.
    pub async fn staged_files(&self) -> Result<Vec<String>, GitError> {
        let output = self.exec.run(&["diff", "--name-only", "--cached"]).await?;
        Ok(status::parse_name_list(&output))
    }

    /// List every pending change with its human-readable status.
    pub async fn changed_files(&self) -> Result<Vec<FileStatus>, GitError> {
        let output = self.exec.run(&["status", "--porcelain"]).await?;
        Ok(status::parse_porcelain(&output))
    }

    /// Fetch the staged diff restricted to the given paths.
    pub async fn diff(&self, paths: &[String]) -> Result<String, GitError> {
        let mut args = vec!["diff", "--staged", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.exec.run(&args).await
    }

    /// Stage every pending change.
    pub async fn stage_all(&self) -> Result<(), GitError> {
        self.exec
            .run(&["add", "."])
            .await
            .map(|_| ())
            .map_err(|e| GitError::StageFailed(Box::new(e)))
    }

    /// Create a commit with the given message, exactly as passed.
    pub async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.exec.run(&["commit", "-m", message]).await.map(|_| ())
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::new()
    }
}

/// Make sure something is staged before a message can be generated.
///
/// When the index is already populated this is a no-op. Otherwise the
/// pending changes are listed and the user is offered to stage all of them;
/// declining aborts, as does a tree with no changes at all.
pub async fn ensure_staged(git: &Git, confirm: &dyn Confirm) -> Result<(), GitError> {
    if !git.staged_files().await?.is_empty() {
        return Ok(());
    }

    let changed = git.changed_files().await?;
    if changed.is_empty() {
        return Err(GitError::NoChanges);
    }

    println!("The following files have changes:");
    for file in &changed {
        println!("{}: {}", file.kind, file.path);
    }

    if !confirm.confirm("Do you want to stage all these changes?") {
        return Err(GitError::NothingStaged);
    }

    git.stage_all().await?;
    println!("Changes staged successfully.");
    Ok(())
}
