//! Interactive prompts.

use std::io::IsTerminal;

use dialoguer::Confirm;

/// Ask for confirmation unless `force` is set.
///
/// Without a terminal there is nobody to ask, so the action is refused
/// with a pointer to `--force`.
pub fn confirm(prompt: &str, force: bool) -> anyhow::Result<bool> {
    if force {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Refusing to prompt without a terminal.\nHint: Pass --force to skip confirmation."
        ));
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
