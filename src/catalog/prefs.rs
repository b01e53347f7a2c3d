//! Liked and saved tool sets

use std::collections::BTreeSet;

use crate::storage::{self, keys, KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKind {
    Liked,
    Saved,
}

impl PreferenceKind {
    fn key(&self) -> &'static str {
        match self {
            Self::Liked => keys::LIKED_TOOLS,
            Self::Saved => keys::SAVED_TOOLS,
        }
    }
}

/// Both preference sets for one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub liked: BTreeSet<String>,
    pub saved: BTreeSet<String>,
}

impl Preferences {
    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }
}

/// Flip membership of `id`, returning whether it is now present
pub fn toggle(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

pub struct PreferenceStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> PreferenceStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load one set; missing or unreadable data yields an empty set
    pub fn load(&self, kind: PreferenceKind) -> BTreeSet<String> {
        storage::read_json_or_default::<Vec<String>, _>(self.store, kind.key())
            .into_iter()
            .collect()
    }

    pub fn load_all(&self) -> Preferences {
        Preferences {
            liked: self.load(PreferenceKind::Liked),
            saved: self.load(PreferenceKind::Saved),
        }
    }

    /// Toggle `id` in one set and persist that set immediately
    pub fn toggle(&self, kind: PreferenceKind, id: &str) -> Result<bool, StorageError> {
        let mut set = self.load(kind);
        let present = toggle(&mut set, id);
        storage::write_json(self.store, kind.key(), &set)?;

        tracing::debug!(?kind, id, present, "toggled preference");
        Ok(present)
    }
}
