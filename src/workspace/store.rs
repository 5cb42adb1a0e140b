//! Record store and selection
//!
//! Holds every mod record created during the session, newest first. The
//! only mutation visible to the history view is [`RecordStore::prepend`];
//! the order is never re-sorted. A separate selection reference (not a
//! field on the record) marks the single record the chat flow targets.

use crate::error::{ModforgeError, Result};
use crate::workspace::record::{ModContent, ModRecord};

/// In-memory, session-scoped collection of mod records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ModRecord>,
    active_id: Option<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the front of the store
    ///
    /// Ids are assigned by the external services and assumed unique; a
    /// duplicate is logged but still inserted so no response is lost.
    pub fn prepend(&mut self, record: ModRecord) {
        if self.records.iter().any(|r| r.id == record.id) {
            tracing::warn!("duplicate record id {} prepended to store", record.id);
        }
        self.records.insert(0, record);
    }

    /// Mark the record with `id` as the active target for the chat flow
    ///
    /// Does not alter ordering. Fails when `id` is not in the store.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if !self.records.iter().any(|r| r.id == id) {
            return Err(ModforgeError::NotFound(format!("mod {}", id)).into());
        }
        self.active_id = Some(id.to_string());
        Ok(())
    }

    /// The currently selected record, if any
    pub fn active(&self) -> Option<&ModRecord> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    /// Id of the currently selected record, if any
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&ModRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace the `content` field of the record with `id`, leaving every
    /// other field untouched
    ///
    /// The replacement is wholesale; partial merges are never performed.
    /// An unknown `id` is an error condition and is logged.
    pub fn replace_content(&mut self, id: &str, new_content: ModContent) -> Result<()> {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.content = Some(new_content);
                Ok(())
            }
            None => {
                tracing::error!("replace_content: no record with id {}", id);
                Err(ModforgeError::NotFound(format!("mod {}", id)).into())
            }
        }
    }

    /// All records, newest first
    pub fn records(&self) -> &[ModRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
