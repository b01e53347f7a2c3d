//! Admin commands - login/logout and management of user-added tools
//!
//! Every command except `login` and `status` requires an active session.

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use super::utils::{self, AppShelf};
use toolshelf::catalog::{CategoryFilter, RecordError, ToolDraft, Validator, ViewQuery};

fn require_session(shelf: &AppShelf) -> Result<()> {
    if !shelf.session().is_authenticated() {
        bail!("Not logged in. Run `toolshelf admin login <PASSWORD>` first.");
    }
    Ok(())
}

pub fn login(shelf: &AppShelf, password: &str) -> Result<()> {
    if shelf.session().is_authenticated() {
        println!("Already logged in.");
        return Ok(());
    }

    let ok = shelf
        .session()
        .authenticate(password)
        .context("Failed to store admin session")?;
    if !ok {
        bail!("Invalid password");
    }

    println!("{}", "Logged in as admin.".green());
    Ok(())
}

pub fn logout(shelf: &AppShelf) -> Result<()> {
    shelf
        .session()
        .logout()
        .context("Failed to clear admin session")?;
    println!("Logged out.");
    Ok(())
}

pub fn status(shelf: &AppShelf) -> String {
    if shelf.session().is_authenticated() {
        "Logged in as admin".to_string()
    } else {
        "Not logged in".to_string()
    }
}

/// Execute the admin list command and return formatted output
pub fn list(shelf: &AppShelf, category: &str, search: &str, json: bool) -> Result<String> {
    require_session(shelf)?;

    let category: CategoryFilter = category
        .parse()
        .with_context(|| format!("Invalid category filter: {}", category))?;
    let query = ViewQuery {
        category,
        search: search.to_string(),
    };
    let view = shelf.admin_listing(&query);

    if json {
        return utils::to_json(&view);
    }

    let mut lines = vec![format!(
        "Total: {}  Built-in: {}  Custom: {}",
        view.total, view.builtin_count, view.custom_count
    )];
    lines.push(
        view.category_counts
            .iter()
            .map(|(c, n)| format!("{}: {}", c, n))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.push(String::new());

    if view.rows.is_empty() {
        lines.push("No tools found. Try adjusting your search or filters.".to_string());
    } else {
        lines.push(utils::render_records(&view.rows));
    }

    Ok(lines.join("\n"))
}

pub fn add(shelf: &AppShelf, draft: ToolDraft) -> Result<()> {
    require_session(shelf)?;

    let data = match Validator::default().accept(draft) {
        Ok(data) => data,
        Err(report) => return utils::report_invalid(&report),
    };

    let record = shelf
        .records()
        .create(data)
        .context("Failed to save tool")?;

    println!(
        "{} {} ({})",
        "Added:".green(),
        record.data().title,
        record.id()
    );
    Ok(())
}

/// Apply `edits` on top of the stored fields and save
pub fn edit(shelf: &AppShelf, id: &str, edits: ToolDraft) -> Result<()> {
    require_session(shelf)?;

    let existing = shelf
        .records()
        .get_by_id(id)
        .with_context(|| format!("Tool not found: {}", id))?;
    if !existing.is_custom() {
        bail!("Cannot edit built-in tool: {}", id);
    }

    let draft = ToolDraft::from(existing.data()).overlay(edits);
    let data = match Validator::default().accept(draft) {
        Ok(data) => data,
        Err(report) => return utils::report_invalid(&report),
    };

    match shelf.records().update(id, data) {
        Ok(record) => {
            println!("{} {} ({})", "Updated:".green(), record.data().title, id);
            Ok(())
        }
        Err(RecordError::NotEditable(_)) => bail!("Cannot edit tool: {}", id),
        Err(e) => Err(e).context("Failed to save tool"),
    }
}

pub fn delete(shelf: &AppShelf, id: &str, yes: bool) -> Result<()> {
    require_session(shelf)?;

    let record = shelf
        .records()
        .get_by_id(id)
        .with_context(|| format!("Tool not found: {}", id))?;
    if !record.is_custom() {
        bail!("Cannot delete built-in tool: {}", id);
    }

    if !yes {
        print!("Delete \"{}\"? (y/N) ", record.data().title);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if shelf
        .records()
        .delete(id)
        .context("Failed to delete tool")?
    {
        println!("{} {}", "Deleted:".green(), record.data().title);
    } else {
        eprintln!("{} {}", "Failed:".red(), id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshelf::shelf::Shelf;
    use toolshelf::storage::{KeyValueStore, MemoryStore};

    fn shelf() -> AppShelf {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        Shelf::new(store).admin_password(Some("letmein".to_string()))
    }

    fn logged_in() -> AppShelf {
        let shelf = shelf();
        login(&shelf, "letmein").unwrap();
        shelf
    }

    fn draft(title: &str) -> ToolDraft {
        ToolDraft {
            title: Some(title.to_string()),
            description: Some("Made by hand".to_string()),
            image: None,
            link: Some("https://example.org/".to_string()),
            category: Some("Other".to_string()),
            initial_likes: Some("12".to_string()),
        }
    }

    #[test]
    fn test_requires_session() {
        let shelf = shelf();
        assert!(list(&shelf, "All", "", false).is_err());
        assert!(add(&shelf, draft("Nope")).is_err());
        assert_eq!(shelf.records().list_all().len(), 10);
    }

    #[test]
    fn test_bad_password() {
        let shelf = shelf();
        assert!(login(&shelf, "wrong").is_err());
        assert_eq!(status(&shelf), "Not logged in");
    }

    #[test]
    fn test_add_edit_delete() {
        let shelf = logged_in();
        assert_eq!(status(&shelf), "Logged in as admin");

        add(&shelf, draft("Handmade")).unwrap();
        let created = shelf.records().get_by_id("11").unwrap();
        assert_eq!(created.data().initial_likes, 12);

        edit(
            &shelf,
            "11",
            ToolDraft {
                title: Some("Handmade v2".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        let edited = shelf.records().get_by_id("11").unwrap();
        assert_eq!(edited.data().title, "Handmade v2");
        assert_eq!(edited.data().link, "https://example.org/");

        delete(&shelf, "11", true).unwrap();
        assert!(shelf.records().get_by_id("11").is_none());
    }

    #[test]
    fn test_add_invalid_draft() {
        let shelf = logged_in();
        let mut bad = draft("");
        bad.link = Some("nope".to_string());
        assert!(add(&shelf, bad).is_err());
        assert_eq!(shelf.records().list_all().len(), 10);
    }

    #[test]
    fn test_builtin_protected() {
        let shelf = logged_in();
        assert!(edit(&shelf, "1", draft("Mine now")).is_err());
        assert!(delete(&shelf, "1", true).is_err());
        assert_eq!(shelf.records().get_by_id("1").unwrap().data().title, "VS Code");
    }

    #[test]
    fn test_list_counts() {
        let shelf = logged_in();
        add(&shelf, draft("Extra")).unwrap();

        let output = list(&shelf, "Other", "", false).unwrap();
        assert!(output.contains("Total: 11  Built-in: 10  Custom: 1"));
        assert!(output.contains("Extra"));
    }

    #[test]
    fn test_logout() {
        let shelf = logged_in();
        logout(&shelf).unwrap();
        assert!(list(&shelf, "All", "", false).is_err());
    }
}
