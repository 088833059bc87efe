use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CommentId = String;

/// Display name used when no author is configured anywhere.
pub const DEFAULT_AUTHOR: &str = "User";

/// One comment or reply: identity, content, like state, and ordered child
/// replies. Insertion order of `replies` is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: CommentId,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub liked_by_you: bool,
    #[serde(default)]
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn new(id: CommentId, text: String, author: String) -> Self {
        Self {
            id,
            text,
            author,
            created_at: Utc::now(),
            like_count: 0,
            liked_by_you: false,
            replies: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .replies
            .iter()
            .map(CommentNode::subtree_size)
            .sum::<usize>()
    }
}
