//! The shelf: saved books, at most one per work, most recently added first.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::types::{Book, ShelfEntry};

pub mod slot;

pub use slot::{FileSlot, MemorySlot, ShelfSlot};

/// Outcome of [ShelfStore::save]. A failed save leaves the in-memory shelf authoritative for the
/// rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed,
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

pub struct ShelfStore<S: ShelfSlot> {
    entries: Vec<ShelfEntry>,
    slot:    S,
}

impl<S: ShelfSlot> ShelfStore<S> {
    /// Empty shelf on top of `slot`, without reading it.
    pub fn new(slot: S) -> Self {
        Self {
            entries: Vec::new(),
            slot,
        }
    }

    /// Shelf loaded from `slot`.
    pub fn open(slot: S) -> Self {
        let mut store = Self::new(slot);
        store.load();
        store
    }

    /// Replace the in-memory shelf with the slot contents. Missing, unreadable or malformed
    /// contents give an empty shelf.
    pub fn load(&mut self) -> &[ShelfEntry] {
        self.entries = match self.read_entries() {
            Ok(entries) => {
                debug!("Loaded {} shelf entries", entries.len());
                entries
            }
            Err(e) => {
                warn!("Discarding unreadable shelf: {e:#}");
                Vec::new()
            }
        };
        &self.entries
    }

    fn read_entries(&self) -> Result<Vec<ShelfEntry>> {
        let entries: Vec<ShelfEntry> = match self.slot.read()? {
            Some(contents) if !contents.trim().is_empty() => serde_json::from_str(&contents)?,
            _ => Vec::new(),
        };
        Ok(dedup(entries))
    }

    /// Write the shelf to the slot. Failures are logged and reported, never raised.
    pub fn save(&mut self) -> SaveStatus {
        let written = serde_json::to_string(&self.entries)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.slot.write(&json));
        match written {
            Ok(()) => {
                debug!("Saved {} shelf entries", self.entries.len());
                SaveStatus::Saved
            }
            Err(e) => {
                warn!("Shelf could not be saved, changes last until exit: {e:#}");
                SaveStatus::Failed
            }
        }
    }

    /// Entries, most recently added first.
    pub fn list(&self) -> &[ShelfEntry] {
        &self.entries
    }

    pub fn contains(&self, work_key: &str) -> bool {
        self.entries.iter().any(|e| e.work_key == work_key)
    }

    /// Remove the book if it is on the shelf, otherwise put it in front. Returns whether the book
    /// is on the shelf afterwards. Does not persist, call [ShelfStore::save] afterwards.
    ///
    /// Books without a work key are never shelved.
    pub fn toggle(&mut self, book: &Book) -> bool {
        if !book.is_usable() {
            warn!("Refusing to shelve a book without a work key");
            return false;
        }
        match self.entries.iter().position(|e| e.work_key == book.work_key) {
            Some(idx) => {
                self.entries.remove(idx);
                info!("Removed {} from the shelf", book.work_key);
                false
            }
            None => {
                self.entries.insert(0, ShelfEntry::from(book));
                info!("Added {} to the shelf", book.work_key);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }
}

/// Keep the first entry per work key. Hand-edited shelves may repeat a work.
fn dedup(entries: Vec<ShelfEntry>) -> Vec<ShelfEntry> {
    let mut kept: Vec<ShelfEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if kept.iter().any(|k| k.work_key == entry.work_key) {
            debug!("Skipping duplicate shelf entry {}", entry.work_key);
            continue;
        }
        kept.push(entry);
    }
    kept
}
