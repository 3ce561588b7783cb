//! Shared test doubles for integration tests.
//!
//! Not every helper is used by every test binary.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ai_commit::error::GitError;
use ai_commit::git::GitExecutor;
use ai_commit::ui::Confirm;

#[derive(Clone)]
enum Reply {
    Ok(String),
    Fail { code: i32, stderr: String },
}

/// Git executor that answers from a script and records every invocation.
///
/// Replies are keyed by the joined argument list. Scripting the same
/// command twice queues the replies in order, with the last one answering
/// all further calls.
#[derive(Clone, Default)]
pub struct ScriptedGit {
    replies: Arc<Mutex<HashMap<String, Vec<Reply>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned stdout for `git <args>`.
    pub fn on_ok(self, args: &str, stdout: &str) -> Self {
        self.push(args, Reply::Ok(stdout.to_string()));
        self
    }

    /// Canned failure for `git <args>`.
    pub fn on_fail(self, args: &str, code: i32, stderr: &str) -> Self {
        self.push(
            args,
            Reply::Fail {
                code,
                stderr: stderr.to_string(),
            },
        );
        self
    }

    fn push(&self, args: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(args.to_string())
            .or_default()
            .push(reply);
    }

    /// Every invocation seen so far, as joined argument strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether any recorded invocation starts with the given prefix.
    pub fn ran(&self, prefix: &str) -> bool {
        self.calls().iter().any(|c| c.starts_with(prefix))
    }
}

#[async_trait]
impl GitExecutor for ScriptedGit {
    async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let key = args.join(" ");
        self.calls.lock().unwrap().push(key.clone());

        let mut replies = self.replies.lock().unwrap();
        let queue = replies
            .get_mut(&key)
            .unwrap_or_else(|| panic!("unexpected git invocation: git {key}"));
        let reply = if queue.len() > 1 {
            queue.remove(0)
        } else {
            queue[0].clone()
        };

        match reply {
            Reply::Ok(stdout) => Ok(stdout),
            Reply::Fail { code, stderr } => Err(GitError::CommandFailed {
                command: format!("git {key}"),
                code,
                stderr,
            }),
        }
    }
}

/// Confirm double that always gives the same answer.
pub struct CannedConfirm(pub bool);

impl Confirm for CannedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Confirm double answering several prompts in order, recording each one.
#[derive(Default)]
pub struct QueuedConfirm {
    answers: Mutex<Vec<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl QueuedConfirm {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.to_vec()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompt messages seen so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for QueuedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            panic!("no scripted answer left for prompt: {message}");
        }
        answers.remove(0)
    }
}
