//! Git subprocess spawning.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Runs git with a list of arguments and returns its trimmed stdout.
///
/// The production implementation shells out to the `git` binary. Tests
/// substitute scripted implementations so parsing and flow logic can run
/// without a real working tree.
#[async_trait]
pub trait GitExecutor: Send + Sync {
    async fn run(&self, args: &[&str]) -> Result<String, GitError>;
}

/// Executor backed by the system `git` binary.
#[derive(Debug, Default)]
pub struct SystemGit {
    dir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the current working directory.
    pub fn new() -> Self {
        Self { dir: None }
    }

    /// Run git inside a specific directory instead of the process cwd.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl GitExecutor for SystemGit {
    async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!("running git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(GitError::SpawnFailed)?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("git {} exited with code {code}", args.join(" "));
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                code,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Check that the `git` binary is installed and runs.
///
/// Uses the `which` crate for cross-platform executable detection, then
/// verifies the binary actually executes.
pub fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }

    let version_check = std::process::Command::new("git")
        .arg("--version")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(GitError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(GitError::NotInstalled);
    }

    debug!("git binary detected");
    Ok(())
}
