//! Renderable post cards.

use crate::model::{PostId, ReactionKind};

use super::timeline::TimelineHost;

/// One projected post.
///
/// A post with a per-post error renders as [`PostCard::Error`] only; none
/// of its content or actions are shown.
#[derive(Debug, Clone, PartialEq)]
pub enum PostCard {
    Error { post_id: PostId, message: String },
    Content(PostContent),
}

impl PostCard {
    pub fn post_id(&self) -> PostId {
        match self {
            PostCard::Error { post_id, .. } => *post_id,
            PostCard::Content(content) => content.post_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostContent {
    pub post_id: PostId,
    /// Fave name followed by the localized fave suffix.
    pub header: String,
    /// `YYYY-MM-DD HH:MM`, local time.
    pub timestamp: String,
    pub message: String,
    /// Always four, in [`ReactionKind::ALL`] order.
    pub reactions: Vec<ReactionButton>,
    /// Present only when the host can delete.
    pub delete: Option<DeleteButton>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionButton {
    pub post_id: PostId,
    pub kind: ReactionKind,
    pub count: u64,
    /// Icon, label and live count, e.g. `👍 いいね: 3`.
    pub label: String,
}

impl ReactionButton {
    /// Forward the tap to the host. Returns whether a counter moved.
    pub fn tap(&self, host: &dyn TimelineHost) -> bool {
        host.react(self.post_id, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteButton {
    pub post_id: PostId,
    pub label: String,
}

impl DeleteButton {
    /// Forward the tap to the host's delete capability.
    ///
    /// A host without the capability never gets a button, but a stale
    /// button tapped against such a host is a no-op.
    pub fn tap(&self, host: &dyn TimelineHost) -> bool {
        match host.as_deletable() {
            Some(deletable) => deletable.delete(self.post_id),
            None => false,
        }
    }
}
