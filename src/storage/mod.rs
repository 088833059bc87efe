pub mod comment_store;
pub mod errors;
pub mod forest;
pub mod snapshot;

pub use comment_store::{CommentStore, seed_forest};
pub use errors::{StorageError, StorageResult};
pub use snapshot::{JsonSnapshot, SnapshotStore};

#[cfg(test)]
pub use snapshot::MemorySnapshot;

#[cfg(test)]
pub mod test_helpers;
