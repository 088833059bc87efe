use chrono::{TimeZone, Utc};

use crate::common::CommentNode;

/// Build a comment with a fixed timestamp so structural comparisons stay
/// deterministic.
pub fn test_node(id: &str, text: &str) -> CommentNode {
    let mut node = CommentNode::new(id.to_string(), text.to_string(), "Test User".to_string());
    node.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    node
}

/// A small forest with nesting three levels deep:
///
/// ```text
/// 1 "root comment"
/// ├── 2 "first reply"
/// │   └── 3 "nested reply"
/// └── 4 "second reply"
/// 5 "another root"
/// ```
pub fn test_forest() -> Vec<CommentNode> {
    let mut nested = test_node("2", "first reply");
    nested.replies.push(test_node("3", "nested reply"));

    let mut root = test_node("1", "root comment");
    root.replies.push(nested);
    root.replies.push(test_node("4", "second reply"));

    vec![root, test_node("5", "another root")]
}
