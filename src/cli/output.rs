use crate::common::CommentNode;
use chrono::{DateTime, Utc};
use console::{Color, style};
use std::time::Duration;

fn format_time_ago(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    if total_seconds < 60 {
        return "just now".to_string();
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{} minute{} ago", minutes, if minutes == 1 { "" } else { "s" });
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" });
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{} day{} ago", days, if days == 1 { "" } else { "s" });
    }

    let months = days / 30;
    if months < 12 {
        return format!("{} month{} ago", months, if months == 1 { "" } else { "s" });
    }

    let years = months / 12;
    format!("{} year{} ago", years, if years == 1 { "" } else { "s" })
}

fn time_since(created_at: DateTime<Utc>) -> String {
    let elapsed = Utc::now() - created_at;
    format_time_ago(elapsed.to_std().unwrap_or_default())
}

pub fn format_like_marker(comment: &CommentNode) -> console::StyledObject<String> {
    let marker = format!(
        "{} {}",
        if comment.liked_by_you { "♥" } else { "♡" },
        comment.like_count
    );
    if comment.liked_by_you {
        style(marker).fg(Color::Red)
    } else {
        style(marker).dim()
    }
}

/// Render one comment at the given depth: header line (author, id, relative
/// time), the text body, and the like marker, all indented two spaces per
/// level.
pub fn format_comment(comment: &CommentNode, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let mut output = String::new();

    output.push_str(&format!(
        "{}{} {} · {}\n",
        indent,
        style(&comment.author).green().bold(),
        style(format!("#{}", comment.id)).dim(),
        style(time_since(comment.created_at)).dim()
    ));

    for line in comment.text.lines() {
        output.push_str(&format!("{}{}\n", indent, line));
    }

    output.push_str(&format!("{}{}\n", indent, format_like_marker(comment)));

    output
}

/// Render a forest recursively, each reply indented one level under its
/// parent.
pub fn format_thread(comments: &[CommentNode], depth: usize) -> String {
    let mut output = String::new();

    for comment in comments {
        output.push_str(&format_comment(comment, depth));
        output.push_str(&format_thread(&comment.replies, depth + 1));
    }

    output
}

pub fn success_message(message: &str) -> String {
    format!("{} {}", style("✓").green().bold(), message)
}

pub fn error_message(message: &str) -> String {
    format!("{} {}", style("✗").red().bold(), message)
}

pub fn warning_message(message: &str) -> String {
    format!("{} {}", style("⚠").yellow().bold(), message)
}

pub fn info_message(message: &str) -> String {
    format!("{} {}", style("ℹ").blue().bold(), message)
}
