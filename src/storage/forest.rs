//! Recursive tree algorithms over the comment forest.
//!
//! Every mutation is a whole-tree rebuild: the input forest is consumed and a
//! new forest is returned, so no node is ever edited while a sibling still
//! holds it. Each operation is a single depth-first pass, O(nodes); forests
//! are UI-scale, so no id index is kept.

use chrono::{DateTime, Utc};

use crate::common::{CommentId, CommentNode};

/// Append a new root comment at the end of the forest.
pub fn add_root(mut forest: Vec<CommentNode>, node: CommentNode) -> Vec<CommentNode> {
    forest.push(node);
    forest
}

/// Append `node` to the replies of the comment matching `parent_id`.
///
/// Returns the rebuilt forest and whether a parent matched. The search stops
/// descending into a branch once its root matches; an unknown id returns the
/// forest unchanged.
pub fn add_reply(
    forest: Vec<CommentNode>,
    parent_id: &str,
    node: CommentNode,
) -> (Vec<CommentNode>, bool) {
    let mut pending = Some(node);
    let forest = insert_reply(forest, parent_id, &mut pending);
    let matched = pending.is_none();
    (forest, matched)
}

fn insert_reply(
    forest: Vec<CommentNode>,
    parent_id: &str,
    pending: &mut Option<CommentNode>,
) -> Vec<CommentNode> {
    forest
        .into_iter()
        .map(|mut comment| {
            if pending.is_some() {
                if comment.id == parent_id {
                    if let Some(reply) = pending.take() {
                        comment.replies.push(reply);
                    }
                } else {
                    comment.replies =
                        insert_reply(std::mem::take(&mut comment.replies), parent_id, pending);
                }
            }
            comment
        })
        .collect()
}

/// Remove the comment matching `id` together with its entire subtree.
///
/// Every remaining comment's replies are reprocessed since the target may be
/// nested at any depth. Unknown ids are a no-op, so the operation is
/// idempotent under retry.
pub fn delete(forest: Vec<CommentNode>, id: &str) -> (Vec<CommentNode>, bool) {
    let mut removed = false;
    let forest = forest
        .into_iter()
        .filter_map(|mut comment| {
            if comment.id == id {
                removed = true;
                return None;
            }
            let (replies, removed_below) = delete(std::mem::take(&mut comment.replies), id);
            comment.replies = replies;
            removed |= removed_below;
            Some(comment)
        })
        .collect();
    (forest, removed)
}

/// Flip the like state of the comment matching `id`.
///
/// Toggling on adds a like, toggling off removes one. The count clamps at
/// zero rather than underflowing on a snapshot whose fields were edited out
/// of sync.
pub fn toggle_like(forest: Vec<CommentNode>, id: &str) -> (Vec<CommentNode>, bool) {
    let mut matched = false;
    let forest = forest
        .into_iter()
        .map(|mut comment| {
            if !matched {
                if comment.id == id {
                    if comment.liked_by_you {
                        comment.liked_by_you = false;
                        comment.like_count = comment.like_count.saturating_sub(1);
                    } else {
                        comment.liked_by_you = true;
                        comment.like_count += 1;
                    }
                    matched = true;
                } else {
                    let (replies, matched_below) =
                        toggle_like(std::mem::take(&mut comment.replies), id);
                    comment.replies = replies;
                    matched = matched_below;
                }
            }
            comment
        })
        .collect();
    (forest, matched)
}

/// Replace the text of the comment matching `id`. The creation timestamp is
/// left untouched.
pub fn edit_text(forest: Vec<CommentNode>, id: &str, text: &str) -> (Vec<CommentNode>, bool) {
    let mut matched = false;
    let forest = forest
        .into_iter()
        .map(|mut comment| {
            if !matched {
                if comment.id == id {
                    comment.text = text.to_string();
                    matched = true;
                } else {
                    let (replies, matched_below) =
                        edit_text(std::mem::take(&mut comment.replies), id, text);
                    comment.replies = replies;
                    matched = matched_below;
                }
            }
            comment
        })
        .collect();
    (forest, matched)
}

/// Depth-first search for the comment matching `id` anywhere in the forest.
pub fn find<'a>(forest: &'a [CommentNode], id: &str) -> Option<&'a CommentNode> {
    for comment in forest {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find(&comment.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Total number of comments in the forest.
pub fn node_count(forest: &[CommentNode]) -> usize {
    forest.iter().map(CommentNode::subtree_size).sum()
}

/// Derive a fresh id from the creation instant.
///
/// The millisecond timestamp keeps ids in monotonic creation order; the
/// candidate is bumped past collisions so ids stay unique even when several
/// comments land in the same millisecond.
pub fn next_id(forest: &[CommentNode], now: DateTime<Utc>) -> CommentId {
    let mut candidate = now.timestamp_millis().max(0) as u64;
    loop {
        let id = candidate.to_string();
        if find(forest, &id).is_none() {
            return id;
        }
        candidate += 1;
    }
}
