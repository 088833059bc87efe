use anyhow::Result;
use clap::Args;

use crate::cli::output::{info_message, success_message, warning_message};
use crate::common::CommentId;

use super::open_store;

#[derive(Args)]
pub struct EditArgs {
    /// Comment ID to edit
    pub id: CommentId,

    /// New text (opens $EDITOR with the current text when omitted)
    #[arg(short, long)]
    pub text: Option<String>,
}

pub fn handle_edit(snapshot_path: std::path::PathBuf, args: EditArgs) -> Result<()> {
    let mut store = open_store(snapshot_path)?;

    let current_text = match store.find(&args.id) {
        Some(comment) => comment.text.clone(),
        None => {
            println!("{}", warning_message(&format!("No comment #{}", args.id)));
            return Ok(());
        }
    };

    let new_text = match args.text {
        Some(text) => text,
        None => edit::edit(&current_text)?,
    };

    if new_text.trim() == current_text {
        println!(
            "{}",
            info_message(&format!("No changes made to comment #{}", args.id))
        );
        return Ok(());
    }

    if store.edit_text(&args.id, &new_text)? {
        println!(
            "{}",
            success_message(&format!("Updated comment #{}", args.id))
        );
    } else {
        println!("{}", info_message("Nothing changed: new text is empty"));
    }

    Ok(())
}
