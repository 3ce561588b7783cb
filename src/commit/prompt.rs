//! Prompt construction for commit message generation.

use crate::groq::Message;

/// Built-in system prompt used when no custom prompt is configured.
pub const DEFAULT_PROMPT: &str = r#"You are writing the commit message for the staged changes in a git repository. You will be given the output of git diff.

STRICT RULES:
1. Reply with the commit message itself and NOTHING else. No preamble, no explanation, no "Here is the commit message".
2. The message is a single sentence on a single line.
3. Start the message with the change type in square brackets:
   - [Add] for new features, functions, or files
   - [Fix] for bug fixes or corrections
   - [Update] for modifications to existing code
   - [Remove] for deletions of code or functionality
   - [Chore] for maintenance, tooling, or minor changes
4. If the changed file names combined are 60 characters or fewer, list them in parentheses after the type: [Type] (files separated by commas) message. Otherwise leave the file list out entirely.

GOOD EXAMPLE:
[Update] (controllers/products.go, controllers/users.go) removed redundant BodyParser calls and directly used validated payload from Locals

BAD EXAMPLE:
Here is a commit message describing the changes: updated two controllers"#;

/// Assemble the conversation for a staged diff.
///
/// The system message is the custom prompt when one is configured and
/// non-empty, the built-in default otherwise. The user message carries the
/// diff verbatim.
pub fn build_messages(custom_prompt: Option<&str>, diff: &str) -> Vec<Message> {
    let system = match custom_prompt {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => DEFAULT_PROMPT,
    };

    vec![
        Message::system(system),
        Message::user(format!("Here's the git diff:\n{diff}")),
    ]
}
