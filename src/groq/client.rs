//! Client for the Groq chat-completions API.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CompletionError;

/// The chat-completions endpoint.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Bound on the whole request/response cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single message in the conversation sent to the API.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for the completions endpoint.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

// Manual Debug so the credential never lands in logs.
impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Client {
    /// Build a client for the given API key.
    ///
    /// Fails when the key is empty: a client must never exist without a
    /// usable credential.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CompletionError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(CompletionError::RequestFailed)?;

        Ok(Self {
            http,
            api_key,
            base_url: GROQ_API_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Request a completion and return the first choice's text.
    ///
    /// A non-2xx response or a body without choices is an error; no retry
    /// is attempted.
    pub async fn complete(
        &self,
        messages: &[Message],
        model: &str,
    ) -> Result<String, CompletionError> {
        let request = CompletionRequest { model, messages };
        debug!("requesting completion from {}", self.base_url);

        let response = self
            .http
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            debug!("completion endpoint answered {status}");
            return Err(CompletionError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(CompletionError::RequestFailed)?;
        let parsed: CompletionResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("completion response did not parse: {e}");
                return Err(CompletionError::EmptyResponse);
            }
        };

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
