use chrono::{Duration, Utc};

use super::errors::StorageResult;
use super::forest;
use super::snapshot::SnapshotStore;
use crate::common::{CommentId, CommentNode};

/// High-level operations over the comment forest.
///
/// `CommentStore` owns the in-memory forest together with an injected
/// snapshot port. Every mutating operation rebuilds the tree through
/// [`forest`] and writes the result back to the slot before returning; read
/// operations never touch the slot.
///
/// Empty input and unknown ids are no-ops, not errors: each operation
/// reports whether anything was applied, and only an applied mutation is
/// persisted. Errors are reserved for the snapshot slot itself (IO,
/// serialization).
///
/// ## Example Usage
///
/// ```rust,no_run
/// use comment_board::storage::{CommentStore, JsonSnapshot};
///
/// let mut store = CommentStore::open(Box::new(JsonSnapshot::new(".comments.json")))?;
///
/// if let Some(id) = store.post("First!", "Alice")? {
///     store.reply(&id, "Welcome aboard", "Bob")?;
///     store.toggle_like(&id)?;
/// }
/// # Ok::<(), comment_board::storage::StorageError>(())
/// ```
pub struct CommentStore {
    forest: Vec<CommentNode>,
    snapshot: Box<dyn SnapshotStore>,
}

impl CommentStore {
    /// Open the store, loading the persisted forest or seeding the
    /// demonstration forest when the slot has never been written.
    ///
    /// A malformed snapshot propagates as an error; the seed is only ever
    /// written over an absent slot, never over existing data.
    pub fn open(mut snapshot: Box<dyn SnapshotStore>) -> StorageResult<Self> {
        let forest = match snapshot.load()? {
            Some(forest) => forest,
            None => {
                let seed = seed_forest();
                snapshot.save(&seed)?;
                seed
            }
        };
        Ok(Self { forest, snapshot })
    }

    /// The current forest, roots in display order.
    pub fn forest(&self) -> &[CommentNode] {
        &self.forest
    }

    /// Find a comment by id anywhere in the forest.
    pub fn find(&self, id: &str) -> Option<&CommentNode> {
        forest::find(&self.forest, id)
    }

    /// Total number of comments across all threads.
    pub fn len(&self) -> usize {
        forest::node_count(&self.forest)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new top-level comment.
    ///
    /// Whitespace-only text is rejected as a no-op and returns `None`.
    pub fn post(&mut self, text: &str, author: &str) -> StorageResult<Option<CommentId>> {
        let Some(node) = self.new_node(text, author) else {
            return Ok(None);
        };
        let id = node.id.clone();
        self.forest = forest::add_root(std::mem::take(&mut self.forest), node);
        self.persist()?;
        Ok(Some(id))
    }

    /// Append a reply under the comment matching `parent_id`.
    ///
    /// Returns `None` without persisting on whitespace-only text or when no
    /// comment matches the id.
    pub fn reply(
        &mut self,
        parent_id: &str,
        text: &str,
        author: &str,
    ) -> StorageResult<Option<CommentId>> {
        let Some(node) = self.new_node(text, author) else {
            return Ok(None);
        };
        let id = node.id.clone();
        let (rebuilt, matched) =
            forest::add_reply(std::mem::take(&mut self.forest), parent_id, node);
        self.forest = rebuilt;
        if !matched {
            return Ok(None);
        }
        self.persist()?;
        Ok(Some(id))
    }

    /// Flip the like state of the comment matching `id`.
    ///
    /// Returns whether a comment matched; an unknown id persists nothing.
    pub fn toggle_like(&mut self, id: &str) -> StorageResult<bool> {
        let (rebuilt, matched) = forest::toggle_like(std::mem::take(&mut self.forest), id);
        self.forest = rebuilt;
        if !matched {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove the comment matching `id` together with its entire subtree.
    pub fn delete(&mut self, id: &str) -> StorageResult<bool> {
        let (rebuilt, removed) = forest::delete(std::mem::take(&mut self.forest), id);
        self.forest = rebuilt;
        if !removed {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Replace the text of the comment matching `id`, leaving its creation
    /// timestamp untouched. Whitespace-only text and unknown ids are no-ops.
    pub fn edit_text(&mut self, id: &str, text: &str) -> StorageResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        let (rebuilt, matched) = forest::edit_text(std::mem::take(&mut self.forest), id, text);
        self.forest = rebuilt;
        if !matched {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn new_node(&self, text: &str, author: &str) -> Option<CommentNode> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = forest::next_id(&self.forest, Utc::now());
        Some(CommentNode::new(id, text.to_string(), author.to_string()))
    }

    fn persist(&mut self) -> StorageResult<()> {
        self.snapshot.save(&self.forest)
    }
}

/// The fixed forest shown on first run, before anything has been posted.
pub fn seed_forest() -> Vec<CommentNode> {
    let now = Utc::now();

    let mut first = CommentNode::new(
        "1".to_string(),
        "This is the first comment!".to_string(),
        "Alice".to_string(),
    );
    first.created_at = now - Duration::days(1);
    first.like_count = 2;

    let mut first_reply = CommentNode::new(
        "4".to_string(),
        "This is the reply to first comment.".to_string(),
        "Bob".to_string(),
    );
    first_reply.created_at = now - Duration::hours(10);
    first_reply.like_count = 5;
    first.replies.push(first_reply);

    let mut second = CommentNode::new(
        "2".to_string(),
        "Great work, looking forward to more updates.".to_string(),
        "Bob".to_string(),
    );
    second.created_at = now - Duration::hours(12);
    second.like_count = 5;

    let mut third = CommentNode::new(
        "3".to_string(),
        "Amazing, keep it up!".to_string(),
        "Charlie".to_string(),
    );
    third.created_at = now - Duration::hours(2);
    third.like_count = 1;

    vec![first, second, third]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::snapshot::MemorySnapshot;
    use crate::storage::test_helpers::*;

    fn empty_store() -> CommentStore {
        CommentStore::open(Box::new(MemorySnapshot::with_forest(Vec::new())))
            .expect("Should open store")
    }

    #[test]
    fn test_open_seeds_absent_slot() {
        let store =
            CommentStore::open(Box::new(MemorySnapshot::new())).expect("Should open store");

        assert_eq!(store.forest().len(), 3);
        assert_eq!(store.find("1").unwrap().author, "Alice");
        assert_eq!(store.find("4").unwrap().like_count, 5);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_open_keeps_existing_slot() {
        let store = CommentStore::open(Box::new(MemorySnapshot::with_forest(test_forest())))
            .expect("Should open store");

        // The seed must never overwrite existing data.
        assert_eq!(store.forest(), test_forest().as_slice());
    }

    #[test]
    fn test_post_appends_root_and_persists() {
        let mut store = empty_store();

        let id = store
            .post("hello", "Test User")
            .expect("Should post")
            .expect("Should apply");

        assert_eq!(store.forest().len(), 1);
        assert_eq!(store.find(&id).unwrap().text, "hello");
    }

    #[test]
    fn test_post_rejects_whitespace_only_text() {
        let mut store = empty_store();

        assert!(store.post("", "Test User").unwrap().is_none());
        assert!(store.post("   ", "Test User").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_post_stores_trimmed_text() {
        let mut store = empty_store();

        let id = store.post("  padded  ", "Test User").unwrap().unwrap();

        assert_eq!(store.find(&id).unwrap().text, "padded");
    }

    #[test]
    fn test_reply_unknown_parent_is_noop() {
        let mut store = empty_store();
        store.post("root", "Test User").unwrap();

        let result = store.reply("missing", "orphan", "Test User").unwrap();

        assert!(result.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_unknown_id_reports_false() {
        let mut store = empty_store();
        store.post("root", "Test User").unwrap();

        assert!(!store.delete("missing").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edit_text_keeps_timestamp() {
        let mut store = empty_store();
        let id = store.post("draft", "Test User").unwrap().unwrap();
        let created_at = store.find(&id).unwrap().created_at;

        assert!(store.edit_text(&id, "final").unwrap());

        let edited = store.find(&id).unwrap();
        assert_eq!(edited.text, "final");
        assert_eq!(edited.created_at, created_at);
    }

    #[test]
    fn test_edit_text_rejects_empty() {
        let mut store = empty_store();
        let id = store.post("draft", "Test User").unwrap().unwrap();

        assert!(!store.edit_text(&id, "   ").unwrap());
        assert_eq!(store.find(&id).unwrap().text, "draft");
    }

    #[test]
    fn test_noops_persist_nothing() {
        let snapshot = MemorySnapshot::with_forest(Vec::new());
        let probe = snapshot.clone();
        let mut store = CommentStore::open(Box::new(snapshot)).expect("Should open store");

        store.post("root", "Test User").unwrap();
        assert_eq!(probe.saves(), 1);

        store.post("   ", "Test User").unwrap();
        store.reply("missing", "text", "Test User").unwrap();
        store.toggle_like("missing").unwrap();
        store.delete("missing").unwrap();
        store.edit_text("missing", "text").unwrap();

        // None of the no-ops reached the slot.
        assert_eq!(probe.saves(), 1);
        assert_eq!(probe.slot().map(|forest| forest.len()), Some(1));
    }

    #[test]
    fn test_full_thread_scenario() {
        // Post, reply, like the reply, then delete the root thread.
        let mut store = empty_store();

        let root_id = store.post("hello", "Test User").unwrap().unwrap();
        assert_eq!(store.forest().len(), 1);
        assert_eq!(store.find(&root_id).unwrap().text, "hello");

        let reply_id = store.reply(&root_id, "hi", "Test User").unwrap().unwrap();
        assert_eq!(store.find(&root_id).unwrap().replies.len(), 1);
        assert_eq!(store.find(&reply_id).unwrap().text, "hi");

        assert!(store.toggle_like(&reply_id).unwrap());
        let reply = store.find(&reply_id).unwrap();
        assert!(reply.liked_by_you);
        assert_eq!(reply.like_count, 1);

        assert!(store.delete(&root_id).unwrap());
        assert!(store.is_empty(), "deleting a root removes its replies too");
    }

    #[test]
    fn test_deleting_last_comment_persists_empty_forest() {
        let mut store = empty_store();
        let id = store.post("only one", "Test User").unwrap().unwrap();

        assert!(store.delete(&id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_seed_forest_shape() {
        let seed = seed_forest();

        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].replies.len(), 1);
        assert_eq!(seed[0].replies[0].author, "Bob");
        assert!(seed.iter().all(|comment| !comment.liked_by_you));
        assert!(seed[0].created_at < seed[2].created_at);
    }
}
