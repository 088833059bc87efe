use anyhow::Result;
use clap::Args;

use crate::cli::output::{success_message, warning_message};
use crate::common::CommentId;

use super::open_store;

#[derive(Args)]
pub struct DeleteArgs {
    /// Comment ID to delete (replies go with it)
    pub id: CommentId,
}

pub fn handle_delete(snapshot_path: std::path::PathBuf, args: DeleteArgs) -> Result<()> {
    let mut store = open_store(snapshot_path)?;

    let subtree_size = match store.find(&args.id) {
        Some(comment) => comment.subtree_size(),
        None => {
            println!("{}", warning_message(&format!("No comment #{}", args.id)));
            return Ok(());
        }
    };

    store.delete(&args.id)?;

    let message = if subtree_size > 1 {
        format!(
            "Deleted comment #{} and {} repl{}",
            args.id,
            subtree_size - 1,
            if subtree_size == 2 { "y" } else { "ies" }
        )
    } else {
        format!("Deleted comment #{}", args.id)
    };
    println!("{}", success_message(&message));

    Ok(())
}
