//! Commit message generation over the completion client.

use tracing::debug;

use crate::commit::prompt::build_messages;
use crate::error::CompletionError;
use crate::groq::Client;

/// Model used when the caller does not override it.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Generates commit messages for staged diffs.
pub struct CommitMessageGenerator {
    client: Client,
    model: String,
    custom_prompt: Option<String>,
}

impl CommitMessageGenerator {
    /// New generator. `model` falls back to [`DEFAULT_MODEL`] and an empty
    /// custom prompt counts as absent.
    pub fn new(client: Client, model: Option<String>, custom_prompt: Option<String>) -> Self {
        Self {
            client,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            custom_prompt: custom_prompt.filter(|p| !p.is_empty()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a commit message for the given staged diff.
    ///
    /// The returned text is exactly what the model produced. Its shape is
    /// observed for debugging but never enforced.
    pub async fn generate(&self, diff: &str) -> Result<String, CompletionError> {
        let messages = build_messages(self.custom_prompt.as_deref(), diff);
        let message = self.client.complete(&messages, &self.model).await?;

        if !looks_like_tagged_subject(&message) {
            debug!("model response is not a single tagged subject line");
        }

        Ok(message)
    }
}

/// Whether the text is a single line starting with a bracketed type tag.
fn looks_like_tagged_subject(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.contains('\n') && trimmed.starts_with('[') && trimmed.contains(']')
}
