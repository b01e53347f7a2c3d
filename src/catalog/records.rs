//! Record store: built-in catalog merged with user-added tools
//!
//! The custom list lives under a single storage key as a JSON array. Every
//! mutation re-reads that array, edits it, and writes it back whole.
//! Elements that no longer decode are hidden from listings but written back
//! untouched, so one bad entry never takes the rest of the list with it.

use serde_json::Value;
use thiserror::Error;

use super::ids::IdStrategy;
use super::model::{StoredTool, Tool, ToolData, ToolRecord};
use crate::storage::{self, keys, KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum RecordError {
    /// Target is built-in or does not exist
    #[error("tool '{0}' cannot be edited (not found or built-in)")]
    NotEditable(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Decoded custom records plus the raw elements that failed to decode
#[derive(Debug, Default)]
struct CustomList {
    tools: Vec<Tool>,
    unreadable: Vec<Value>,
}

impl CustomList {
    fn decode(raw: Vec<Value>) -> Self {
        let mut list = Self::default();
        for (index, element) in raw.into_iter().enumerate() {
            match serde_json::from_value::<StoredTool>(element.clone()) {
                Ok(stored) => list.tools.push(stored.tool),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable custom tool");
                    list.unreadable.push(element);
                }
            }
        }
        list
    }

    /// Ids held by unreadable elements, still reserved for allocation
    fn reserved_ids(&self) -> impl Iterator<Item = &str> {
        self.unreadable
            .iter()
            .filter_map(|v| v.get("id").and_then(Value::as_str))
    }
}

pub struct RecordStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    builtins: &'a [Tool],
    ids: IdStrategy,
}

impl<'a, S: KeyValueStore + ?Sized> RecordStore<'a, S> {
    pub fn new(store: &'a S, builtins: &'a [Tool], ids: IdStrategy) -> Self {
        Self {
            store,
            builtins,
            ids,
        }
    }

    /// Built-in records in catalog order, then custom records in creation order
    pub fn list_all(&self) -> Vec<ToolRecord> {
        self.builtins
            .iter()
            .cloned()
            .map(ToolRecord::BuiltIn)
            .chain(self.load_custom().tools.into_iter().map(ToolRecord::Custom))
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<ToolRecord> {
        self.list_all().into_iter().find(|r| r.id() == id)
    }

    /// Add a new custom record with a freshly allocated id
    pub fn create(&self, data: ToolData) -> Result<ToolRecord, StorageError> {
        let mut custom = self.load_custom();

        let id = {
            let existing = self
                .builtins
                .iter()
                .chain(custom.tools.iter())
                .map(|t| t.id.as_str())
                .chain(custom.reserved_ids());
            self.ids.allocate(existing)
        };

        let tool = Tool::new(id, data);
        custom.tools.push(tool.clone());
        self.save_custom(custom)?;

        tracing::info!(id = %tool.id, title = %tool.data.title, "created tool");
        Ok(ToolRecord::Custom(tool))
    }

    /// Replace a custom record's fields, keeping its id
    pub fn update(&self, id: &str, data: ToolData) -> Result<ToolRecord, RecordError> {
        self.ensure_editable(id)?;

        let mut custom = self.load_custom();
        let slot = custom
            .tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RecordError::NotEditable(id.to_string()))?;
        slot.data = data;
        let updated = slot.clone();

        self.save_custom(custom)?;

        tracing::info!(id, "updated tool");
        Ok(ToolRecord::Custom(updated))
    }

    /// Remove a custom record; `false` if it was built-in or missing
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        match self.ensure_editable(id) {
            Ok(()) => {}
            Err(RecordError::NotEditable(_)) => return Ok(false),
            Err(RecordError::Storage(e)) => return Err(e),
        }

        let mut custom = self.load_custom();
        let before = custom.tools.len();
        custom.tools.retain(|t| t.id != id);
        if custom.tools.len() == before {
            return Ok(false);
        }

        self.save_custom(custom)?;

        tracing::info!(id, "deleted tool");
        Ok(true)
    }

    fn ensure_editable(&self, id: &str) -> Result<(), RecordError> {
        match self.get_by_id(id) {
            Some(record) if record.is_custom() => Ok(()),
            Some(_) => {
                tracing::warn!(id, "refusing to modify built-in tool");
                Err(RecordError::NotEditable(id.to_string()))
            }
            None => {
                tracing::warn!(id, "no such tool");
                Err(RecordError::NotEditable(id.to_string()))
            }
        }
    }

    fn load_custom(&self) -> CustomList {
        CustomList::decode(storage::read_json_or_default::<Vec<Value>, _>(
            self.store,
            keys::CUSTOM_TOOLS,
        ))
    }

    fn save_custom(&self, custom: CustomList) -> Result<(), StorageError> {
        let mut stored = Vec::with_capacity(custom.tools.len() + custom.unreadable.len());
        for tool in custom.tools {
            let element = serde_json::to_value(StoredTool {
                tool,
                is_custom: true,
            })
            .map_err(|source| StorageError::Encode {
                key: keys::CUSTOM_TOOLS.to_string(),
                source,
            })?;
            stored.push(element);
        }
        stored.extend(custom.unreadable);
        storage::write_json(self.store, keys::CUSTOM_TOOLS, &stored)
    }
}
