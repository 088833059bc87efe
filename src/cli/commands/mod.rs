use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod delete;
mod edit;
mod like;
mod post;
mod reply;
mod show;
mod ui;

pub use delete::{DeleteArgs, handle_delete};
pub use edit::{EditArgs, handle_edit};
pub use like::{LikeArgs, handle_like};
pub use post::{PostArgs, handle_post};
pub use reply::{ReplyArgs, handle_reply};
pub use show::{ShowArgs, handle_show};
pub use ui::{UiArgs, handle_ui};

use crate::common::{DEFAULT_AUTHOR, EnvProvider};
use crate::storage::{CommentStore, JsonSnapshot};

/// Default snapshot slot, relative to the working directory.
pub const DEFAULT_SNAPSHOT: &str = ".comments.json";

#[derive(Parser)]
#[command(name = "comment-board")]
#[command(about = "A local-first threaded comment board")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Snapshot file (defaults to .comments.json in the current directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Post a new top-level comment
    Post(PostArgs),
    /// Reply to a comment
    Reply(ReplyArgs),
    /// Toggle your like on a comment
    Like(LikeArgs),
    /// Delete a comment and all its replies
    Delete(DeleteArgs),
    /// Edit a comment's text
    Edit(EditArgs),
    /// Show the comment tree
    Show(ShowArgs),
    /// Browse and reply interactively
    Ui(UiArgs),
}

pub fn run_command(cli: Cli) -> Result<()> {
    let snapshot_path = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT));

    match cli.command {
        Commands::Post(args) => handle_post(snapshot_path, args),
        Commands::Reply(args) => handle_reply(snapshot_path, args),
        Commands::Like(args) => handle_like(snapshot_path, args),
        Commands::Delete(args) => handle_delete(snapshot_path, args),
        Commands::Edit(args) => handle_edit(snapshot_path, args),
        Commands::Show(args) => handle_show(snapshot_path, args),
        Commands::Ui(args) => handle_ui(snapshot_path, args),
    }
}

/// Open the store over the file-backed snapshot slot.
pub(crate) fn open_store(snapshot_path: PathBuf) -> Result<CommentStore> {
    Ok(CommentStore::open(Box::new(JsonSnapshot::new(
        snapshot_path,
    )))?)
}

/// Resolve the display name used for new comments.
pub(crate) fn resolve_author(author: Option<String>, env_provider: impl EnvProvider) -> String {
    author.unwrap_or_else(|| {
        env_provider
            .get_var("COMMENT_AUTHOR")
            .or_else(|| env_provider.get_var("USER"))
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
    })
}
