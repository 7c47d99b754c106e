//! Plain-text rendering of projected screens.

use std::fmt::Write;

use super::card::PostCard;
use super::identity::IdentityScreen;
use super::timeline::TimelineView;

pub fn render_identity(screen: &IdentityScreen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", screen.title);
    let _ = writeln!(out, "{}: {}", screen.username_label, screen.input);
    if let Some(error) = &screen.error {
        let _ = writeln!(out, "{}", error);
    }
    let _ = writeln!(out, "[{}]", screen.button_label);
    out
}

/// One block per card, separated by a blank line.
pub fn render_timeline(view: &TimelineView) -> String {
    let mut out = String::new();
    if let Some(error) = &view.page_error {
        let _ = writeln!(out, "! {}", error);
    }
    if let Some(status) = &view.status_line {
        let _ = writeln!(out, "{}", status);
    }
    for (i, card) in view.cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match card {
            PostCard::Error { message, .. } => {
                let _ = writeln!(out, "{}", message);
            }
            PostCard::Content(post) => {
                let _ = writeln!(out, "{}  {}", post.header, post.timestamp);
                let _ = writeln!(out, "{}", post.message);
                let buttons: Vec<String> = post
                    .reactions
                    .iter()
                    .map(|b| format!("[{}]", b.label))
                    .chain(post.delete.iter().map(|d| format!("[{}]", d.label)))
                    .collect();
                let _ = writeln!(out, "{}", buttons.join(" "));
            }
        }
    }
    out
}
