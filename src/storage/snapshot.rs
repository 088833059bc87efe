use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::{StorageError, StorageResult};
use crate::common::CommentNode;

/// Persistence port for the comment forest.
///
/// The store only ever talks to this trait, so the backing slot can be a file
/// in production and an in-memory buffer in tests. The slot holds exactly one
/// value: the JSON-serialized forest, overwritten wholesale on every save.
pub trait SnapshotStore {
    /// Read the persisted forest. `None` when the slot has never been
    /// written; a present-but-malformed slot is an error.
    fn load(&self) -> StorageResult<Option<Vec<CommentNode>>>;

    /// Overwrite the slot with the full forest.
    fn save(&mut self, forest: &[CommentNode]) -> StorageResult<()>;
}

/// File-backed snapshot slot.
///
/// Saves go through a temporary file in the same directory followed by a
/// rename, so a crash mid-write never leaves a torn snapshot behind.
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonSnapshot {
    fn load(&self) -> StorageResult<Option<Vec<CommentNode>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let forest = serde_json::from_str(&raw)?;
        Ok(Some(forest))
    }

    fn save(&mut self, forest: &[CommentNode]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(forest)?;

        // The temporary file must live on the same filesystem as the slot
        // for the rename to stay atomic.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|err| StorageError::snapshot_write(self.path.display().to_string(), err.to_string()))?;

        Ok(())
    }
}

/// In-memory slot for tests.
///
/// Clones share the same slot, so a test can keep a probe handle after the
/// store takes ownership of the boxed port.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemorySnapshot {
    inner: std::rc::Rc<std::cell::RefCell<MemorySlot>>,
}

#[cfg(test)]
#[derive(Default)]
struct MemorySlot {
    forest: Option<Vec<CommentNode>>,
    saves: usize,
}

#[cfg(test)]
impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forest(forest: Vec<CommentNode>) -> Self {
        let snapshot = Self::default();
        snapshot.inner.borrow_mut().forest = Some(forest);
        snapshot
    }

    /// Number of times `save` has been called, for asserting that no-ops
    /// persist nothing.
    pub fn saves(&self) -> usize {
        self.inner.borrow().saves
    }

    pub fn slot(&self) -> Option<Vec<CommentNode>> {
        self.inner.borrow().forest.clone()
    }
}

#[cfg(test)]
impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> StorageResult<Option<Vec<CommentNode>>> {
        Ok(self.inner.borrow().forest.clone())
    }

    fn save(&mut self, forest: &[CommentNode]) -> StorageResult<()> {
        let mut slot = self.inner.borrow_mut();
        slot.forest = Some(forest.to_vec());
        slot.saves += 1;
        Ok(())
    }
}
