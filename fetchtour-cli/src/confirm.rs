//! Yes/no prompts for destructive commands

use std::io::IsTerminal;

use fetchtour_core::Confirm;
use tracing::warn;

/// Asks on the terminal with `inquire`, defaulting to "no"
pub struct InquireConfirm;

impl Confirm for InquireConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if !std::io::stdin().is_terminal() {
            warn!("stdin is not a terminal; pass --yes to skip the prompt");
            return false;
        }

        match inquire::Confirm::new(prompt).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "confirmation prompt failed");
                false
            }
        }
    }
}

/// `--yes`
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
