//! Browse commands - catalog listing, detail view, categories, saved tools

use anyhow::{Context, Result};

use super::utils::{self, AppShelf};
use toolshelf::catalog::{CategoryFilter, ViewQuery};

/// Options for the browse command
pub struct BrowseOptions {
    /// Category name or "All"
    pub category: String,
    /// Case-insensitive text matched against title and description
    pub search: String,
    /// Limit number of results
    pub limit: Option<usize>,
    /// Emit JSON instead of a table
    pub json: bool,
}

/// Execute the browse command and return formatted output
pub fn execute(shelf: &AppShelf, options: BrowseOptions) -> Result<String> {
    let category: CategoryFilter = options
        .category
        .parse()
        .with_context(|| format!("Invalid category filter: {}", options.category))?;
    let query = ViewQuery {
        category,
        search: options.search,
    };

    let mut cards = shelf.catalog(&query);
    let total_count = cards.len();
    if let Some(n) = options.limit {
        cards.truncate(n);
    }

    if options.json {
        return utils::to_json(&cards);
    }

    if cards.is_empty() {
        return Ok(
            "No tools found. Try adjusting your category filter or search terms.".to_string(),
        );
    }

    let heading = match query.category {
        CategoryFilter::All => "Discover Tools".to_string(),
        CategoryFilter::Only(c) => c.to_string(),
    };

    let mut output = format!("{}\n{}", heading, utils::render_cards(&cards));
    if cards.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} tools",
            cards.len(),
            total_count
        ));
    } else {
        output.push_str(&format!("\n\n{} tools found", total_count));
    }

    Ok(output)
}

/// Show one tool in detail
pub fn show(shelf: &AppShelf, id: &str, json: bool) -> Result<String> {
    let card = shelf
        .card(id)
        .with_context(|| format!("Tool not found: {}", id))?;

    if json {
        utils::to_json(&card)
    } else {
        Ok(utils::render_detail(&card))
    }
}

/// List category choices
pub fn categories(shelf: &AppShelf) -> String {
    shelf.categories().join("\n")
}

/// List saved tools
pub fn saves(shelf: &AppShelf, search: &str, json: bool) -> Result<String> {
    let cards = shelf.saved(search);

    if json {
        return utils::to_json(&cards);
    }

    if cards.is_empty() {
        return Ok(if search.is_empty() {
            "No saved tools yet. Use `toolshelf save <ID>` to bookmark one.".to_string()
        } else {
            "No saved tools match your search.".to_string()
        });
    }

    Ok(format!(
        "{}\n\n{} saved tools",
        utils::render_cards(&cards),
        cards.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshelf::catalog::PreferenceKind;
    use toolshelf::shelf::Shelf;
    use toolshelf::storage::{KeyValueStore, MemoryStore};

    fn shelf() -> AppShelf {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        Shelf::new(store)
    }

    fn options(category: &str, search: &str) -> BrowseOptions {
        BrowseOptions {
            category: category.to_string(),
            search: search.to_string(),
            limit: None,
            json: false,
        }
    }

    #[test]
    fn test_browse_all() {
        let output = execute(&shelf(), options("All", "")).unwrap();
        assert!(output.starts_with("Discover Tools"));
        assert!(output.contains("10 tools found"));
    }

    #[test]
    fn test_browse_invalid_category() {
        assert!(execute(&shelf(), options("Games", "")).is_err());
    }

    #[test]
    fn test_browse_empty_state() {
        let output = execute(&shelf(), options("Other", "")).unwrap();
        assert!(output.starts_with("No tools found"));
    }

    #[test]
    fn test_browse_json_order() {
        let mut opts = options("Design", "");
        opts.json = true;
        let output = execute(&shelf(), opts).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let ids: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["5", "2", "9"]);
    }

    #[test]
    fn test_browse_limit() {
        let mut opts = options("All", "");
        opts.limit = Some(3);
        let output = execute(&shelf(), opts).unwrap();
        assert!(output.contains("Showing 3 of 10 tools"));
    }

    #[test]
    fn test_show_missing() {
        assert!(show(&shelf(), "404", false).is_err());
    }

    #[test]
    fn test_saves_listing() {
        let shelf = shelf();
        assert!(saves(&shelf, "", false).unwrap().starts_with("No saved tools yet"));

        shelf
            .preferences()
            .toggle(PreferenceKind::Saved, "4")
            .unwrap();
        let output = saves(&shelf, "", false).unwrap();
        assert!(output.contains("Tailwind CSS"));
        assert!(output.contains("1 saved tools"));
    }

    #[test]
    fn test_categories_output() {
        assert!(categories(&shelf()).starts_with("All\n"));
    }
}
