//! Catalog data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed set of tool categories
///
/// Names are matched exactly, including case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Development,
    Design,
    Productivity,
    #[serde(rename = "AI")]
    Ai,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Development,
        Category::Design,
        Category::Productivity,
        Category::Ai,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Design => "Design",
            Self::Productivity => "Productivity",
            Self::Ai => "AI",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Everything about a tool except its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub link: String,
    pub category: Category,
    /// Absent in records written by forms that never asked for it
    #[serde(default)]
    pub initial_likes: u64,
}

/// A tool with its catalog-wide identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    #[serde(flatten)]
    pub data: ToolData,
}

impl Tool {
    pub fn new(id: impl Into<String>, data: ToolData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// A catalog entry, either shipped with the application or user-added
///
/// Only `Custom` records may be updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StoredTool", from = "StoredTool")]
pub enum ToolRecord {
    BuiltIn(Tool),
    Custom(Tool),
}

impl ToolRecord {
    pub fn tool(&self) -> &Tool {
        match self {
            Self::BuiltIn(tool) | Self::Custom(tool) => tool,
        }
    }

    pub fn into_tool(self) -> Tool {
        match self {
            Self::BuiltIn(tool) | Self::Custom(tool) => tool,
        }
    }

    pub fn id(&self) -> &str {
        &self.tool().id
    }

    pub fn data(&self) -> &ToolData {
        &self.tool().data
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Wire shape of a record: the tool fields plus an `isCustom` flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTool {
    #[serde(flatten)]
    pub tool: Tool,
    #[serde(default)]
    pub is_custom: bool,
}

impl From<ToolRecord> for StoredTool {
    fn from(record: ToolRecord) -> Self {
        let is_custom = record.is_custom();
        Self {
            tool: record.into_tool(),
            is_custom,
        }
    }
}

impl From<StoredTool> for ToolRecord {
    fn from(stored: StoredTool) -> Self {
        if stored.is_custom {
            Self::Custom(stored.tool)
        } else {
            Self::BuiltIn(stored.tool)
        }
    }
}

/// Unvalidated tool fields as entered by a user
///
/// Every field is raw text; `Validator::accept` turns a draft into `ToolData`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub initial_likes: Option<String>,
}

impl ToolDraft {
    /// Replace fields with those set in `edits`
    pub fn overlay(self, edits: ToolDraft) -> ToolDraft {
        ToolDraft {
            title: edits.title.or(self.title),
            description: edits.description.or(self.description),
            image: edits.image.or(self.image),
            link: edits.link.or(self.link),
            category: edits.category.or(self.category),
            initial_likes: edits.initial_likes.or(self.initial_likes),
        }
    }
}

impl From<&ToolData> for ToolDraft {
    fn from(data: &ToolData) -> Self {
        Self {
            title: Some(data.title.clone()),
            description: Some(data.description.clone()),
            image: Some(data.image.clone()),
            link: Some(data.link.clone()),
            category: Some(data.category.to_string()),
            initial_likes: Some(data.initial_likes.to_string()),
        }
    }
}
