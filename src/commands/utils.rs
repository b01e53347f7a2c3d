//! Shared utilities for commands

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

use toolshelf::catalog::{ToolCard, ToolRecord, ValidationReport};
use toolshelf::config::Settings;
use toolshelf::shelf::Shelf;
use toolshelf::storage::{KeyValueStore, MemoryStore, SqliteStore};

pub type AppShelf = Shelf<Box<dyn KeyValueStore>>;

/// Open the shelf over the SQLite file at `path`, or over memory if `None`
pub fn open_shelf(settings: &Settings, path: Option<&Path>) -> Result<AppShelf> {
    let store: Box<dyn KeyValueStore> = match path {
        Some(path) => Box::new(
            SqliteStore::open(path)
                .with_context(|| format!("Failed to open storage: {}", path.display()))?,
        ),
        None => Box::new(MemoryStore::new()),
    };
    Ok(Shelf::with_settings(store, settings))
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Pretty-printed JSON for `--json` output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to encode JSON")
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn flag(on: bool, mark: &str) -> String {
    if on {
        mark.to_string()
    } else {
        "-".to_string()
    }
}

/// Render annotated cards as a table
pub fn render_cards(cards: &[ToolCard]) -> String {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Title"),
        Cell::new("Category"),
        Cell::new("Likes"),
        Cell::new("Liked"),
        Cell::new("Saved"),
        Cell::new("Description"),
    ]);

    for card in cards {
        let data = card.record.data();
        table.add_row(vec![
            Cell::new(card.record.id()),
            Cell::new(&data.title),
            Cell::new(data.category),
            Cell::new(card.total_likes),
            Cell::new(flag(card.is_liked, "♥")),
            Cell::new(flag(card.is_saved, "★")),
            Cell::new(truncate(&data.description, 60)),
        ]);
    }

    table.to_string()
}

/// Render plain records (admin listing) as a table
pub fn render_records(records: &[ToolRecord]) -> String {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Title"),
        Cell::new("Category"),
        Cell::new("Likes"),
        Cell::new("Source"),
        Cell::new("Link"),
    ]);

    for record in records {
        let data = record.data();
        let source = if record.is_custom() { "custom" } else { "built-in" };
        table.add_row(vec![
            Cell::new(record.id()),
            Cell::new(&data.title),
            Cell::new(data.category),
            Cell::new(data.initial_likes),
            Cell::new(source),
            Cell::new(&data.link),
        ]);
    }

    table.to_string()
}

/// Multi-line detail view of one card
pub fn render_detail(card: &ToolCard) -> String {
    let data = card.record.data();
    let mut lines = vec![];

    lines.push(format!("{} ({})", data.title.bold(), card.record.id()));
    lines.push(format!("Category: {}", data.category));
    lines.push(format!("Link: {}", data.link));
    if !data.image.is_empty() {
        lines.push(format!("Image: {}", data.image));
    }
    lines.push(format!(
        "Likes: {}{}",
        card.total_likes,
        if card.is_liked { " (liked)" } else { "" }
    ));
    lines.push(format!("Saved: {}", if card.is_saved { "yes" } else { "no" }));
    lines.push(format!(
        "Source: {}",
        if card.record.is_custom() {
            "custom"
        } else {
            "built-in"
        }
    ));
    lines.push(String::new());
    lines.push(data.description.clone());

    lines.join("\n")
}

/// Print every validation message and fail
pub fn report_invalid(report: &ValidationReport) -> Result<()> {
    eprintln!("{}", "Please fix the following errors:".red());
    for message in report.messages() {
        eprintln!("  - {}", message);
    }
    bail!("Validation failed ({} error(s))", report.errors().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshelf::catalog::{Category, Tool, ToolData};

    fn card() -> ToolCard {
        ToolCard {
            record: ToolRecord::Custom(Tool::new(
                "11",
                ToolData {
                    title: "Zed".to_string(),
                    description: "A fast editor".to_string(),
                    image: String::new(),
                    link: "https://zed.dev/".to_string(),
                    category: Category::Development,
                    initial_likes: 4,
                },
            )),
            is_liked: true,
            is_saved: false,
            total_likes: 5,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("a bit too long", 6), "a bit…");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééé", 3), "éé…");
    }

    #[test]
    fn test_render_cards_contains_fields() {
        let output = render_cards(&[card()]);
        assert!(output.contains("Zed"));
        assert!(output.contains("Development"));
        assert!(output.contains('5'));
        assert!(output.contains('♥'));
    }

    #[test]
    fn test_render_detail() {
        let output = render_detail(&card());
        assert!(output.contains("Likes: 5 (liked)"));
        assert!(output.contains("Saved: no"));
        assert!(output.contains("Source: custom"));
        assert!(!output.contains("Image:"));
    }

    #[test]
    fn test_open_ephemeral_shelf() {
        let settings = Settings::from_lookup(|key| {
            (key == toolshelf::config::HOME_ENV).then(|| "/tmp/toolshelf-test".to_string())
        })
        .unwrap();
        let shelf = open_shelf(&settings, None).unwrap();
        assert_eq!(shelf.categories().first().map(String::as_str), Some("All"));
    }
}
