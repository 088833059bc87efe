use anyhow::Result;
use clap::Args;

use crate::cli::output::{format_thread, info_message, warning_message};
use crate::common::CommentId;

use super::open_store;

#[derive(Args)]
pub struct ShowArgs {
    /// Comment ID to show (whole board when omitted)
    pub id: Option<CommentId>,
}

pub fn handle_show(snapshot_path: std::path::PathBuf, args: ShowArgs) -> Result<()> {
    let store = open_store(snapshot_path)?;

    match args.id {
        Some(id) => match store.find(&id) {
            Some(comment) => print!("{}", format_thread(std::slice::from_ref(comment), 0)),
            None => println!("{}", warning_message(&format!("No comment #{}", id))),
        },
        None => {
            if store.is_empty() {
                println!("{}", info_message("No comments yet"));
            } else {
                print!("{}", format_thread(store.forest(), 0));
            }
        }
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
        CommentStore::open(Box::new(JsonSnapshot::new(&snapshot_path)))
            .expect("Should seed store");
        (temp_dir, snapshot_path)
    }

    #[test]
    fn test_show_command_whole_board() {
        let (_temp_dir, snapshot_path) = setup_temp_board();

        let result = handle_show(snapshot_path, ShowArgs { id: None });

        assert!(result.is_ok(), "Show command should succeed");
    }

    #[test]
    fn test_show_command_single_thread() {
        let (_temp_dir, snapshot_path) = setup_temp_board();

        let result = handle_show(
            snapshot_path,
            ShowArgs {
                id: Some("1".to_string()),
            },
        );

        assert!(result.is_ok(), "Show command should succeed for a thread");
    }

    #[test]
    fn test_show_command_unknown_id_warns_without_error() {
        let (_temp_dir, snapshot_path) = setup_temp_board();

        let result = handle_show(
            snapshot_path,
            ShowArgs {
                id: Some("9999".to_string()),
            },
        );

        assert!(result.is_ok(), "Unknown id warns, does not error");
    }
}
