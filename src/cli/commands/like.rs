use anyhow::Result;
use clap::Args;

use crate::cli::output::{success_message, warning_message};
use crate::common::CommentId;

use super::open_store;

#[derive(Args)]
pub struct LikeArgs {
    /// Comment ID to like or unlike
    pub id: CommentId,
}

pub fn handle_like(snapshot_path: std::path::PathBuf, args: LikeArgs) -> Result<()> {
    let mut store = open_store(snapshot_path)?;

    if !store.toggle_like(&args.id)? {
        println!("{}", warning_message(&format!("No comment #{}", args.id)));
        return Ok(());
    }

    if let Some(comment) = store.find(&args.id) {
        let verb = if comment.liked_by_you {
            "Liked"
        } else {
            "Unliked"
        };
        println!(
            "{}",
            success_message(&format!(
                "{} comment #{} ({} like{})",
                verb,
                args.id,
                comment.like_count,
                if comment.like_count == 1 { "" } else { "s" }
            ))
        );
    }

    Ok(())
}
