use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::SlotError;
use crate::flow::Node;

/// The single local persistence slot for a node collection.
///
/// The stored value is the JSON-serialized bare node array. There is one
/// slot per store, read once at startup and rewritten after every
/// successful collection change. Implementations own all storage
/// transport; the store only consumes their resolved results.
pub trait SlotStore {
    /// Reads the slot. `None` means nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Node>>, SlotError>;

    /// Overwrites the slot with the given collection.
    fn save(&self, nodes: &[Node]) -> Result<(), SlotError>;

    /// Empties the slot.
    fn clear(&self) -> Result<(), SlotError>;
}

impl<S: SlotStore + ?Sized> SlotStore for Arc<S> {
    fn load(&self) -> Result<Option<Vec<Node>>, SlotError> {
        (**self).load()
    }

    fn save(&self, nodes: &[Node]) -> Result<(), SlotError> {
        (**self).save(nodes)
    }

    fn clear(&self) -> Result<(), SlotError> {
        (**self).clear()
    }
}

/// A slot stored as one JSON file on disk. An absent file reads as an
/// empty slot; clearing removes the file.
pub struct FileSlotStore {
    path: PathBuf,
}

impl FileSlotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn slot_name(&self) -> String {
        self.path.display().to_string()
    }
}

impl SlotStore for FileSlotStore {
    fn load(&self) -> Result<Option<Vec<Node>>, SlotError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SlotError::Read {
                    slot: self.slot_name(),
                    message: e.to_string(),
                });
            }
        };
        let nodes = serde_json::from_str(&text).map_err(|e| SlotError::Corrupt {
            slot: self.slot_name(),
            message: e.to_string(),
        })?;
        Ok(Some(nodes))
    }

    fn save(&self, nodes: &[Node]) -> Result<(), SlotError> {
        let json = serde_json::to_string(nodes).map_err(|e| SlotError::Write {
            slot: self.slot_name(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|e| SlotError::Write {
            slot: self.slot_name(),
            message: e.to_string(),
        })
    }

    fn clear(&self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SlotError::Write {
                slot: self.slot_name(),
                message: e.to_string(),
            }),
        }
    }
}

/// An in-memory slot for non-file hosts and tests. Share it as an
/// `Arc<MemorySlot>` to inspect what a store persisted.
#[derive(Default)]
pub struct MemorySlot {
    stored: Mutex<Option<Vec<Node>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlot {
    fn load(&self) -> Result<Option<Vec<Node>>, SlotError> {
        let guard = self.stored.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, nodes: &[Node]) -> Result<(), SlotError> {
        let mut guard = self.stored.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(nodes.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), SlotError> {
        let mut guard = self.stored.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
