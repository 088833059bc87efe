use anyhow::Result;
use clap::Args;
use console::{Term, style};

use crate::cli::output::{format_comment, info_message, warning_message};
use crate::cli::session::ThreadSession;
use crate::common::{CommentNode, SystemEnvProvider};

use super::{open_store, resolve_author};

#[derive(Args)]
pub struct UiArgs {
    /// Author display name (defaults to $COMMENT_AUTHOR, then $USER)
    #[arg(long)]
    pub author: Option<String>,
}

const HELP_LINE: &str = "post <text> · reply <id> · like <id> · delete <id> · quit";

/// Interactive loop: render the board, read one command, relay it through the
/// session, re-render. Opening a composer prompts for the draft right away;
/// a whitespace draft leaves the composer open, shown inline under its
/// comment on the next frame.
pub fn handle_ui(snapshot_path: std::path::PathBuf, args: UiArgs) -> Result<()> {
    let store = open_store(snapshot_path)?;
    let author = resolve_author(args.author, SystemEnvProvider);
    let mut session = ThreadSession::new(store, author);
    let term = Term::stdout();
    let mut notice: Option<String> = None;

    loop {
        term.clear_screen()?;
        term.write_str(&render_board(&session))?;
        if let Some(notice) = notice.take() {
            term.write_line(&notice)?;
        }
        term.write_str("> ")?;

        let line = term.read_line()?;
        let (command, rest) = split_command(&line);

        match command {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "p" | "post" => {
                if session.post(rest)?.is_none() {
                    notice = Some(info_message("Nothing posted: comment text is empty"));
                }
            }
            "r" | "reply" => {
                let id = rest.trim();
                if session.find(id).is_none() {
                    notice = Some(warning_message(&format!("No comment #{}", id)));
                    continue;
                }
                session.toggle_composer(id);
                if session.composer_open(id) {
                    term.write_str(&format!("reply to #{}> ", id))?;
                    let draft = term.read_line()?;
                    session.update_draft(id, &draft);
                    if session.submit_reply(id)?.is_none() {
                        notice = Some(info_message(
                            "Draft kept: reply text is empty (reply again to discard)",
                        ));
                    }
                }
            }
            "l" | "like" => {
                if !session.toggle_like(rest.trim())? {
                    notice = Some(warning_message(&format!("No comment #{}", rest.trim())));
                }
            }
            "d" | "delete" => {
                if !session.delete(rest.trim())? {
                    notice = Some(warning_message(&format!("No comment #{}", rest.trim())));
                }
            }
            _ => notice = Some(info_message(HELP_LINE)),
        }
    }

    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    }
}

fn render_board(session: &ThreadSession) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n\n", style(HELP_LINE).dim()));

    if session.forest().is_empty() {
        output.push_str(&format!("{}\n", style("No comments yet").dim()));
    } else {
        render_comments(&mut output, session, session.forest(), 0);
    }

    output.push('\n');
    output
}

fn render_comments(
    output: &mut String,
    session: &ThreadSession,
    comments: &[CommentNode],
    depth: usize,
) {
    for comment in comments {
        output.push_str(&format_comment(comment, depth));
        if session.composer_open(&comment.id) {
            let indent = "  ".repeat(depth);
            let draft = session.draft(&comment.id).unwrap_or("");
            output.push_str(&format!(
                "{}{}\n",
                indent,
                style(format!("↳ replying: {}", draft)).cyan()
            ));
        }
        render_comments(output, session, &comment.replies, depth + 1);
    }
}
