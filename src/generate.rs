//! The generate flow: staged diff in, confirmed commit out.

use tracing::debug;

use crate::commit::CommitMessageGenerator;
use crate::config::{ConfigKey, ConfigStore};
use crate::error::GenerateError;
use crate::git::{self, Git};
use crate::groq::Client;
use crate::ui::Confirm;

/// Options for a `generate` run.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Model identifier override.
    pub model: Option<String>,
    /// Completions endpoint override, for pointing at a mock server.
    pub api_url: Option<String>,
}

/// Run the generate flow end to end.
///
/// Verifies the repository, makes sure something is staged (offering to
/// stage pending changes), sends the staged diff for completion, shows the
/// result, and commits it verbatim once the user approves.
pub async fn run(
    store: &ConfigStore,
    repo: &Git,
    confirm: &dyn Confirm,
    options: GenerateOptions,
) -> Result<(), GenerateError> {
    repo.assert_repository().await?;
    git::ensure_staged(repo, confirm).await?;

    let staged = repo.staged_files().await?;
    let diff = repo.diff(&staged).await?;
    if diff.is_empty() {
        return Err(GenerateError::NoStagedChanges);
    }
    debug!("staged diff spans {} files", staged.len());

    let api_key = store.get(ConfigKey::GroqApiKey)?;
    let custom_prompt = store.get(ConfigKey::CommitPrompt)?;

    let mut client = Client::new(api_key)?;
    if let Some(url) = options.api_url {
        client = client.with_base_url(url);
    }

    let generator = CommitMessageGenerator::new(client, options.model, Some(custom_prompt));
    debug!("requesting completion with model {}", generator.model());
    let message = generator.generate(&diff).await?;

    println!("Generated Commit Message:\n\n{message}\n");

    if confirm.confirm("Do you want to use this commit message?") {
        repo.commit(&message).await?;
        println!("Changes committed successfully.");
    } else {
        println!("Commit aborted.");
    }

    Ok(())
}
