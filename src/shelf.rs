//! Application state holder
//!
//! `Shelf` owns the injected key-value store and the built-in catalog, and
//! is the only way to reach the record, preference and session stores.

use crate::catalog::builtin::builtin_tools;
use crate::catalog::view::{self, AdminView};
use crate::catalog::{
    AdminSession, IdStrategy, PreferenceStore, RecordStore, Tool, ToolCard, ViewQuery,
};
use crate::config::Settings;
use crate::storage::KeyValueStore;

pub struct Shelf<S: KeyValueStore> {
    store: S,
    builtins: Vec<Tool>,
    id_strategy: IdStrategy,
    admin_password: Option<String>,
}

impl<S: KeyValueStore> Shelf<S> {
    /// Shelf with the built-in catalog and default settings
    pub fn new(store: S) -> Self {
        Self {
            store,
            builtins: builtin_tools(),
            id_strategy: IdStrategy::default(),
            admin_password: None,
        }
    }

    pub fn with_settings(store: S, settings: &Settings) -> Self {
        Self::new(store)
            .id_strategy(settings.id_strategy)
            .admin_password(settings.admin_password.clone())
    }

    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn admin_password(mut self, password: Option<String>) -> Self {
        self.admin_password = password;
        self
    }

    pub fn records(&self) -> RecordStore<'_, S> {
        RecordStore::new(&self.store, &self.builtins, self.id_strategy)
    }

    pub fn preferences(&self) -> PreferenceStore<'_, S> {
        PreferenceStore::new(&self.store)
    }

    pub fn session(&self) -> AdminSession<'_, S> {
        AdminSession::new(&self.store, self.admin_password.as_deref())
    }

    pub fn catalog(&self, query: &ViewQuery) -> Vec<ToolCard> {
        view::catalog_view(self.records().list_all(), query, &self.preferences().load_all())
    }

    pub fn saved(&self, search: &str) -> Vec<ToolCard> {
        view::saved_view(self.records().list_all(), search, &self.preferences().load_all())
    }

    pub fn admin_listing(&self, query: &ViewQuery) -> AdminView {
        view::admin_view(self.records().list_all(), query)
    }

    pub fn categories(&self) -> Vec<String> {
        view::categories(&self.records().list_all())
    }

    /// A single record annotated with the current preferences
    pub fn card(&self, id: &str) -> Option<ToolCard> {
        let record = self.records().get_by_id(id)?;
        Some(ToolCard::annotate(record, &self.preferences().load_all()))
    }
}
