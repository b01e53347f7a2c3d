//! Derived listings: the public catalog, the saved list, and the admin table
//!
//! All functions here are pure over records and preferences already loaded
//! from storage.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::model::{Category, ToolRecord, UnknownCategory};
use super::prefs::Preferences;

/// Name of the "no category filter" choice
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

/// Category filter plus free-text search
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub category: CategoryFilter,
    pub search: String,
}

/// A record annotated with the current profile's preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCard {
    #[serde(flatten)]
    pub record: ToolRecord,
    pub is_liked: bool,
    pub is_saved: bool,
    pub total_likes: u64,
}

impl ToolCard {
    pub fn annotate(record: ToolRecord, prefs: &Preferences) -> Self {
        let is_liked = prefs.is_liked(record.id());
        let is_saved = prefs.is_saved(record.id());
        let total_likes = record.data().initial_likes.saturating_add(u64::from(is_liked));
        Self {
            record,
            is_liked,
            is_saved,
            total_likes,
        }
    }
}

/// Case-insensitive substring match on title or description
pub fn matches_search(record: &ToolRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    let data = record.data();
    data.title.to_lowercase().contains(&needle)
        || data.description.to_lowercase().contains(&needle)
}

fn filtered(records: Vec<ToolRecord>, query: &ViewQuery) -> impl Iterator<Item = ToolRecord> + '_ {
    records
        .into_iter()
        .filter(move |r| query.category.matches(r.data().category))
        .filter(move |r| matches_search(r, &query.search))
}

/// Filter, annotate, and order by total likes (most first)
///
/// The sort is stable, so records with equal totals keep catalog order.
pub fn catalog_view(
    records: Vec<ToolRecord>,
    query: &ViewQuery,
    prefs: &Preferences,
) -> Vec<ToolCard> {
    let mut cards: Vec<ToolCard> = filtered(records, query)
        .map(|r| ToolCard::annotate(r, prefs))
        .collect();
    cards.sort_by(|a, b| b.total_likes.cmp(&a.total_likes));
    cards
}

/// Saved records matching `search`, in catalog order
pub fn saved_view(records: Vec<ToolRecord>, search: &str, prefs: &Preferences) -> Vec<ToolCard> {
    records
        .into_iter()
        .filter(|r| prefs.is_saved(r.id()))
        .filter(|r| matches_search(r, search))
        .map(|r| ToolCard::annotate(r, prefs))
        .collect()
}

/// `"All"` followed by each category present, in first-seen order
pub fn categories(records: &[ToolRecord]) -> Vec<String> {
    let mut seen: Vec<Category> = Vec::new();
    for record in records {
        let category = record.data().category;
        if !seen.contains(&category) {
            seen.push(category);
        }
    }

    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(seen.into_iter().map(|c| c.to_string()))
        .collect()
}

/// Admin listing: filtered rows plus totals over the whole catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminView {
    pub rows: Vec<ToolRecord>,
    pub total: usize,
    pub custom_count: usize,
    pub builtin_count: usize,
    pub category_counts: Vec<(Category, usize)>,
}

pub fn admin_view(records: Vec<ToolRecord>, query: &ViewQuery) -> AdminView {
    let total = records.len();
    let custom_count = records.iter().filter(|r| r.is_custom()).count();
    let category_counts = Category::ALL
        .into_iter()
        .map(|c| (c, records.iter().filter(|r| r.data().category == c).count()))
        .collect();

    AdminView {
        rows: filtered(records, query).collect(),
        total,
        custom_count,
        builtin_count: total - custom_count,
        category_counts,
    }
}
