//! Tool draft validation
//!
//! Validation is table-driven: each field has one rule that can be switched
//! on or off. Every enabled rule runs, so a draft reports all of its problems
//! at once rather than just the first.

use std::fmt;
use thiserror::Error;
use url::Url;

use super::model::{Category, ToolData, ToolDraft};

/// Draft fields that carry a validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Image,
    Link,
    Category,
    InitialLikes,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Image => "Image URL",
            Self::Link => "Link",
            Self::Category => "Category",
            Self::InitialLikes => "Initial likes",
        };
        f.write_str(label)
    }
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),

    #[error("{0} must be a valid URL")]
    InvalidUrl(Field),

    #[error("Invalid category")]
    InvalidCategory,

    #[error("{0} must be a non-negative number")]
    InvalidNumber(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) | Self::InvalidUrl(field) | Self::InvalidNumber(field) => *field,
            Self::InvalidCategory => Field::Category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub enabled: bool,
}

/// Rules in reporting order. Image validation has been switched off since
/// tools without artwork became allowed.
pub const DEFAULT_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Title,
        enabled: true,
    },
    FieldRule {
        field: Field::Description,
        enabled: true,
    },
    FieldRule {
        field: Field::Image,
        enabled: false,
    },
    FieldRule {
        field: Field::Link,
        enabled: true,
    },
    FieldRule {
        field: Field::Category,
        enabled: true,
    },
    FieldRule {
        field: Field::InitialLikes,
        enabled: true,
    },
];

/// Outcome of validating a draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Human-readable messages, one per failed rule
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationReport {}

#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<FieldRule>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl Validator {
    /// Switch the rule for `field` on or off
    pub fn with_rule(mut self, field: Field, enabled: bool) -> Self {
        for rule in self.rules.iter_mut().filter(|r| r.field == field) {
            rule.enabled = enabled;
        }
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn validate(&self, draft: &ToolDraft) -> ValidationReport {
        let errors = self
            .rules
            .iter()
            .filter(|rule| rule.enabled)
            .filter_map(|rule| check(rule.field, draft))
            .collect();
        ValidationReport { errors }
    }

    /// Validate a draft and convert it into typed tool data
    pub fn accept(&self, draft: ToolDraft) -> Result<ToolData, ValidationReport> {
        let mut report = self.validate(&draft);

        // Typed fields must convert even when their rule is switched off
        let category = match draft.category.as_deref().map(str::parse::<Category>) {
            Some(Ok(category)) => Some(category),
            Some(Err(_)) => {
                push_unique(&mut report, ValidationError::InvalidCategory);
                None
            }
            None => {
                push_unique(&mut report, ValidationError::Required(Field::Category));
                None
            }
        };
        let initial_likes = match parse_likes(draft.initial_likes.as_deref()) {
            Ok(likes) => likes,
            Err(e) => {
                push_unique(&mut report, e);
                0
            }
        };

        match category {
            Some(category) if report.is_valid() => Ok(ToolData {
                title: draft.title.unwrap_or_default(),
                description: draft.description.unwrap_or_default(),
                image: draft.image.unwrap_or_default(),
                link: draft.link.unwrap_or_default(),
                category,
                initial_likes,
            }),
            _ => Err(report),
        }
    }
}

fn push_unique(report: &mut ValidationReport, error: ValidationError) {
    if !report.errors.iter().any(|e| e.field() == error.field()) {
        report.errors.push(error);
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn check_url(field: Field, value: Option<&str>) -> Option<ValidationError> {
    match value {
        _ if is_blank(value) => Some(ValidationError::Required(field)),
        Some(v) if Url::parse(v).is_err() => Some(ValidationError::InvalidUrl(field)),
        _ => None,
    }
}

/// Parse an optional like count; a blank value counts as absent
fn parse_likes(value: Option<&str>) -> Result<u64, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(0),
        Some(v) => v
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidNumber(Field::InitialLikes)),
    }
}

fn check(field: Field, draft: &ToolDraft) -> Option<ValidationError> {
    match field {
        Field::Title if is_blank(draft.title.as_deref()) => Some(ValidationError::Required(field)),
        Field::Description if is_blank(draft.description.as_deref()) => {
            Some(ValidationError::Required(field))
        }
        Field::Image => check_url(field, draft.image.as_deref()),
        Field::Link => check_url(field, draft.link.as_deref()),
        Field::Category => match draft.category.as_deref() {
            None | Some("") => Some(ValidationError::Required(field)),
            Some(c) if c.parse::<Category>().is_err() => Some(ValidationError::InvalidCategory),
            Some(_) => None,
        },
        Field::InitialLikes => parse_likes(draft.initial_likes.as_deref()).err(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ToolDraft {
        ToolDraft {
            title: Some("Zed".to_string()),
            description: Some("A fast editor".to_string()),
            image: Some(String::new()),
            link: Some("https://zed.dev/".to_string()),
            category: Some("Development".to_string()),
            initial_likes: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        let report = Validator::default().validate(&valid_draft());
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn test_missing_title_reported_once() {
        let draft = ToolDraft {
            title: Some("   ".to_string()),
            ..valid_draft()
        };
        let report = Validator::default().validate(&draft);

        assert!(!report.is_valid());
        assert_eq!(report.errors(), &[ValidationError::Required(Field::Title)]);
        assert_eq!(report.messages(), vec!["Title is required"]);
    }

    #[test]
    fn test_errors_not_short_circuited() {
        let draft = ToolDraft {
            title: None,
            description: Some(String::new()),
            link: Some("not a url".to_string()),
            category: Some("Games".to_string()),
            initial_likes: Some("-4".to_string()),
            ..Default::default()
        };
        let report = Validator::default().validate(&draft);

        assert_eq!(
            report.messages(),
            vec![
                "Title is required",
                "Description is required",
                "Link must be a valid URL",
                "Invalid category",
                "Initial likes must be a non-negative number",
            ]
        );
        let title_errors = report
            .errors()
            .iter()
            .filter(|e| e.field() == Field::Title)
            .count();
        assert_eq!(title_errors, 1);
    }

    #[test]
    fn test_empty_link_is_required_not_invalid() {
        let draft = ToolDraft {
            link: Some(String::new()),
            ..valid_draft()
        };
        let report = Validator::default().validate(&draft);
        assert_eq!(report.errors(), &[ValidationError::Required(Field::Link)]);
    }

    #[test]
    fn test_missing_category() {
        let draft = ToolDraft {
            category: None,
            ..valid_draft()
        };
        let report = Validator::default().validate(&draft);
        assert_eq!(report.messages(), vec!["Category is required"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let draft = ToolDraft {
            category: Some("ai".to_string()),
            ..valid_draft()
        };
        let report = Validator::default().validate(&draft);
        assert_eq!(report.errors(), &[ValidationError::InvalidCategory]);
    }

    #[test]
    fn test_initial_likes_rules() {
        let validator = Validator::default();
        for (likes, ok) in [("0", true), ("42", true), ("-1", false), ("lots", false)] {
            let draft = ToolDraft {
                initial_likes: Some(likes.to_string()),
                ..valid_draft()
            };
            assert_eq!(validator.validate(&draft).is_valid(), ok, "likes = {likes}");
        }
    }

    #[test]
    fn test_image_rule_disabled_by_default() {
        let draft = ToolDraft {
            image: Some("definitely not a url".to_string()),
            ..valid_draft()
        };
        assert!(Validator::default().validate(&draft).is_valid());

        let strict = Validator::default().with_rule(Field::Image, true);
        assert_eq!(
            strict.validate(&draft).messages(),
            vec!["Image URL must be a valid URL"]
        );
    }

    #[test]
    fn test_image_rule_flag_in_table() {
        let image = DEFAULT_RULES
            .iter()
            .find(|r| r.field == Field::Image)
            .unwrap();
        assert!(!image.enabled);
        assert_eq!(DEFAULT_RULES.iter().filter(|r| r.enabled).count(), 5);
    }

    #[test]
    fn test_accept_converts() {
        let draft = ToolDraft {
            category: Some("AI".to_string()),
            initial_likes: Some("7".to_string()),
            ..valid_draft()
        };
        let data = Validator::default().accept(draft).unwrap();
        assert_eq!(data.category, Category::Ai);
        assert_eq!(data.initial_likes, 7);
        assert_eq!(data.title, "Zed");
    }

    #[test]
    fn test_accept_defaults_likes_to_zero() {
        let data = Validator::default().accept(valid_draft()).unwrap();
        assert_eq!(data.initial_likes, 0);
    }

    #[test]
    fn test_accept_enforces_category_when_rule_disabled() {
        let validator = Validator::default().with_rule(Field::Category, false);
        let draft = ToolDraft {
            category: Some("Games".to_string()),
            ..valid_draft()
        };
        let report = validator.accept(draft).unwrap_err();
        assert_eq!(report.errors(), &[ValidationError::InvalidCategory]);
    }
}
