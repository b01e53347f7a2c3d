//! Tool catalog: model, stores, validation and views

pub mod builtin;
pub mod ids;
pub mod model;
pub mod prefs;
pub mod records;
pub mod session;
pub mod validate;
pub mod view;

pub use ids::IdStrategy;
pub use model::{Category, Tool, ToolData, ToolDraft, ToolRecord};
pub use prefs::{PreferenceKind, PreferenceStore, Preferences};
pub use records::{RecordError, RecordStore};
pub use session::AdminSession;
pub use validate::{ValidationReport, Validator};
pub use view::{CategoryFilter, ToolCard, ViewQuery};
