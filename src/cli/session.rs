use std::collections::HashMap;

use crate::common::{CommentId, CommentNode};
use crate::storage::{CommentStore, StorageResult, forest};

/// Ephemeral reply input under one comment. Existing in the session map
/// means the composer is expanded; absent means collapsed. The draft lives
/// only here and never reaches the store until submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplyComposer {
    pub draft: String,
}

/// Interactive view state over a [`CommentStore`].
///
/// The session relays user intents (post, reply, like, delete) to the store
/// and owns the per-comment reply-composer state; it never edits the forest
/// itself. Composer state is purely local and is gone when the session ends.
pub struct ThreadSession {
    store: CommentStore,
    composers: HashMap<CommentId, ReplyComposer>,
    author: String,
}

impl ThreadSession {
    pub fn new(store: CommentStore, author: String) -> Self {
        Self {
            store,
            composers: HashMap::new(),
            author,
        }
    }

    pub fn forest(&self) -> &[CommentNode] {
        self.store.forest()
    }

    pub fn find(&self, id: &str) -> Option<&CommentNode> {
        self.store.find(id)
    }

    pub fn composer_open(&self, id: &str) -> bool {
        self.composers.contains_key(id)
    }

    pub fn draft(&self, id: &str) -> Option<&str> {
        self.composers.get(id).map(|composer| composer.draft.as_str())
    }

    /// Toggle the reply composer under a comment: collapsed opens with an
    /// empty draft, expanded collapses and discards the draft.
    pub fn toggle_composer(&mut self, id: &str) {
        if self.composers.remove(id).is_none() {
            self.composers
                .insert(id.to_string(), ReplyComposer::default());
        }
    }

    pub fn update_draft(&mut self, id: &str, draft: &str) {
        if let Some(composer) = self.composers.get_mut(id) {
            composer.draft = draft.to_string();
        }
    }

    /// Submit the draft under `parent_id`.
    ///
    /// A successful submission collapses the composer and clears its draft.
    /// A whitespace-only draft is rejected and the composer stays expanded,
    /// draft intact. A collapsed composer submits nothing.
    pub fn submit_reply(&mut self, parent_id: &str) -> StorageResult<Option<CommentId>> {
        let Some(composer) = self.composers.get(parent_id) else {
            return Ok(None);
        };
        if composer.draft.trim().is_empty() {
            return Ok(None);
        }

        let draft = composer.draft.clone();
        let author = self.author.clone();
        let posted = self.store.reply(parent_id, &draft, &author)?;
        if posted.is_some() {
            self.composers.remove(parent_id);
        }
        Ok(posted)
    }

    pub fn post(&mut self, text: &str) -> StorageResult<Option<CommentId>> {
        let author = self.author.clone();
        self.store.post(text, &author)
    }

    pub fn toggle_like(&mut self, id: &str) -> StorageResult<bool> {
        self.store.toggle_like(id)
    }

    /// Delete a comment; composers open under the removed subtree are
    /// discarded with it.
    pub fn delete(&mut self, id: &str) -> StorageResult<bool> {
        let removed = self.store.delete(id)?;
        if removed {
            let remaining = self.store.forest();
            self.composers
                .retain(|composer_id, _| forest::find(remaining, composer_id).is_some());
        }
        Ok(removed)
    }
}
