//! Timeline projection: `TimelineFeed` → cards.

use fave_flux::I18nStore;

use super::card::{DeleteButton, PostCard, PostContent, ReactionButton};
use super::time::format_timestamp;
use crate::error::TimelineError;
use crate::i18n_strings::reaction_label_url;
use crate::model::{Post, PostId, ReactionKind};
use crate::reactions::find_duplicate_id;
use crate::state::TimelineFeed;

/// Whoever owns the timeline's actions.
pub trait TimelineHost {
    /// One reaction tap. Returns whether a counter moved.
    fn react(&self, post_id: PostId, kind: ReactionKind) -> bool;

    /// The delete capability, if this host has it.
    fn as_deletable(&self) -> Option<&dyn Deletable> {
        None
    }
}

/// Delete capability. Hosts without it get no delete buttons.
pub trait Deletable {
    fn delete(&self, post_id: PostId) -> bool;
}

/// What the timeline screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub username: String,
    /// Server order, never re-sorted.
    pub cards: Vec<PostCard>,
    /// A failed refresh. Independent of per-post errors.
    pub page_error: Option<String>,
    pub loading: bool,
    /// "Loading..." while refreshing, "No posts yet" for an empty feed.
    pub status_line: Option<String>,
}

impl TimelineView {
    pub fn card(&self, post_id: PostId) -> Option<&PostCard> {
        self.cards.iter().find(|c| c.post_id() == post_id)
    }
}

/// Project the feed for `host`.
///
/// Refuses a sequence in which two posts share an id, since taps could
/// not be routed.
pub fn project_timeline(
    feed: &TimelineFeed,
    host: &dyn TimelineHost,
    i18n: &I18nStore,
) -> Result<TimelineView, TimelineError> {
    if let Some(id) = find_duplicate_id(&feed.posts) {
        return Err(TimelineError::DuplicatePostId(id));
    }
    let can_delete = host.as_deletable().is_some();
    let suffix = i18n.get("ui/post/fave_suffix");
    let delete_label = i18n.get("ui/post/delete");

    let cards = feed
        .posts
        .iter()
        .map(|post| match feed.post_errors.get(&post.id) {
            Some(message) => PostCard::Error {
                post_id: post.id,
                message: message.clone(),
            },
            None => PostCard::Content(content(post, &suffix, can_delete.then_some(&delete_label), i18n)),
        })
        .collect::<Vec<_>>();

    let page_error = feed.phase.error().map(str::to_string);
    let loading = feed.phase.is_pending();
    let status_line = if loading {
        Some(i18n.get("ui/timeline/loading"))
    } else if cards.is_empty() && page_error.is_none() {
        Some(i18n.get("ui/timeline/empty"))
    } else {
        None
    };

    Ok(TimelineView {
        username: feed.username.clone(),
        cards,
        page_error,
        loading,
        status_line,
    })
}

fn content(post: &Post, suffix: &str, delete_label: Option<&String>, i18n: &I18nStore) -> PostContent {
    let reactions = ReactionKind::ALL
        .iter()
        .map(|&kind| {
            let count = post.reactions.get(kind);
            ReactionButton {
                post_id: post.id,
                kind,
                count,
                label: i18n.get(&reaction_label_url(kind, count)),
            }
        })
        .collect();

    PostContent {
        post_id: post.id,
        header: format!("{} {}", post.fave_name, suffix),
        timestamp: format_timestamp(&post.date_time),
        message: post.message.clone(),
        reactions,
        delete: delete_label.map(|label| DeleteButton {
            post_id: post.id,
            label: label.clone(),
        }),
    }
}
