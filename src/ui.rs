//! Interactive confirmation prompts.
//!
//! Flows take the [`Confirm`] trait so tests can script answers instead of
//! reading the terminal.

/// A yes/no question put to the user.
pub trait Confirm: Send + Sync {
    /// Ask the question. Anything but an explicit yes counts as no.
    fn confirm(&self, message: &str) -> bool;
}

/// Terminal-backed confirmation using dialoguer.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
