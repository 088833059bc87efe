use anyhow::Result;
use clap::Args;

use crate::cli::output::{info_message, success_message, warning_message};
use crate::common::{CommentId, SystemEnvProvider};

use super::{open_store, resolve_author};

#[derive(Args)]
pub struct ReplyArgs {
    /// Comment ID to reply to
    pub id: CommentId,

    /// Reply text (opens $EDITOR when omitted)
    pub text: Option<String>,

    /// Author display name (defaults to $COMMENT_AUTHOR, then $USER)
    #[arg(long)]
    pub author: Option<String>,
}

pub fn handle_reply(snapshot_path: std::path::PathBuf, args: ReplyArgs) -> Result<()> {
    let mut store = open_store(snapshot_path)?;
    let author = resolve_author(args.author, SystemEnvProvider);

    if store.find(&args.id).is_none() {
        println!(
            "{}",
            warning_message(&format!("No comment #{} to reply to", args.id))
        );
        return Ok(());
    }

    let text = match args.text {
        Some(text) => text,
        None => edit::edit("")?,
    };

    match store.reply(&args.id, &text, &author)? {
        Some(reply_id) => println!(
            "{}",
            success_message(&format!("Replied to #{} with #{}", args.id, reply_id))
        ),
        None => println!("{}", info_message("Nothing posted: reply text is empty")),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CommentStore, JsonSnapshot};
    use tempfile::TempDir;

    fn setup_temp_board() -> (TempDir, std::path::PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let snapshot_path = temp_dir.path().join(".comments.json");
        // Opening once writes the seed forest.
        CommentStore::open(Box::new(JsonSnapshot::new(&snapshot_path)))
            .expect("Should seed store");
        (temp_dir, snapshot_path)
    }

    fn open(snapshot_path: &std::path::Path) -> CommentStore {
        CommentStore::open(Box::new(JsonSnapshot::new(snapshot_path)))
            .expect("Should open store")
    }

    #[test]
    fn test_reply_command_nests_under_parent() {
        let (_temp_dir, snapshot_path) = setup_temp_board();

        let args = ReplyArgs {
            id: "2".to_string(),
            text: Some("Agreed!".to_string()),
            author: Some("Dana".to_string()),
        };

        let result = handle_reply(snapshot_path.clone(), args);
        assert!(result.is_ok(), "Reply command should succeed");

        let store = open(&snapshot_path);
        let parent = store.find("2").unwrap();
        assert_eq!(parent.replies.len(), 1);
        assert_eq!(parent.replies[0].text, "Agreed!");
        assert_eq!(parent.replies[0].author, "Dana");
    }

    #[test]
    fn test_reply_command_nests_under_nested_parent() {
        let (_temp_dir, snapshot_path) = setup_temp_board();

        // "4" is itself a reply under "1".
        let args = ReplyArgs {
            id: "4".to_string(),
            text: Some("Going deeper".to_string()),
            author: Some("Dana".to_string()),
        };

        handle_reply(snapshot_path.clone(), args).expect("Reply should succeed");

        let store = open(&snapshot_path);
        let nested = store.find("4").unwrap();
        assert_eq!(nested.replies.len(), 1);
        assert_eq!(nested.replies[0].text, "Going deeper");
    }

    #[test]
    fn test_reply_command_unknown_parent_warns_without_error() {
        let (_temp_dir, snapshot_path) = setup_temp_board();

        let args = ReplyArgs {
            id: "9999".to_string(),
            text: Some("Into the void".to_string()),
            author: Some("Dana".to_string()),
        };

        let result = handle_reply(snapshot_path.clone(), args);
        assert!(result.is_ok(), "Unknown parent is a no-op, not an error");

        let store = open(&snapshot_path);
        assert_eq!(store.len(), 4, "Seed forest is unchanged");
    }
}
