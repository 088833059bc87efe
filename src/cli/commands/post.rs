use anyhow::Result;
use clap::Args;

use crate::cli::output::{info_message, success_message};
use crate::common::SystemEnvProvider;

use super::{open_store, resolve_author};

#[derive(Args)]
pub struct PostArgs {
    /// Comment text (opens $EDITOR when omitted)
    pub text: Option<String>,

    /// Author display name (defaults to $COMMENT_AUTHOR, then $USER)
    #[arg(long)]
    pub author: Option<String>,
}

pub fn handle_post(snapshot_path: std::path::PathBuf, args: PostArgs) -> Result<()> {
    let mut store = open_store(snapshot_path)?;
    let author = resolve_author(args.author, SystemEnvProvider);

    let text = match args.text {
        Some(text) => text,
        None => edit::edit("")?,
    };

    match store.post(&text, &author)? {
        Some(id) => println!("{}", success_message(&format!("Posted comment #{}", id))),
        None => println!("{}", info_message("Nothing posted: comment text is empty")),
    }

    Ok(())
}
