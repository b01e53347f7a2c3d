//! Like/save commands - toggle per-profile preferences

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::utils::AppShelf;
use toolshelf::catalog::PreferenceKind;

/// Toggle `id` in the liked or saved set and describe the new state
pub fn toggle(shelf: &AppShelf, kind: PreferenceKind, id: &str) -> Result<String> {
    let record = shelf
        .records()
        .get_by_id(id)
        .with_context(|| format!("Tool not found: {}", id))?;

    let present = shelf
        .preferences()
        .toggle(kind, id)
        .context("Failed to update preferences")?;

    let title = &record.data().title;
    let message = match (kind, present) {
        (PreferenceKind::Liked, true) => format!("{} {}", "Liked".red(), title),
        (PreferenceKind::Liked, false) => format!("Unliked {}", title),
        (PreferenceKind::Saved, true) => format!("{} {}", "Saved".yellow(), title),
        (PreferenceKind::Saved, false) => format!("Removed {} from saves", title),
    };
    Ok(message)
}
