//! Timeline state, stored at `timeline/feed`.

use std::collections::BTreeMap;

use super::{AsyncPhase, ViewId};
use crate::error::TimelineError;
use crate::model::{Post, PostId, ReactionKind};
use crate::reactions;

/// The mounted timeline of one user.
///
/// `posts` keeps server order. `post_errors` are per-post errors supplied
/// by an upstream collaborator; they never affect sibling posts or
/// `phase`, which is the page-level refresh state.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFeed {
    pub view: ViewId,
    pub username: String,
    pub posts: Vec<Post>,
    pub phase: AsyncPhase,
    pub post_errors: BTreeMap<PostId, String>,
}

impl TimelineFeed {
    pub const PATH: &'static str = "timeline/feed";

    /// A freshly mounted, empty timeline scoped to `username`.
    pub fn mounted(username: &str) -> Self {
        Self {
            view: ViewId::next(),
            username: username.to_string(),
            posts: Vec::new(),
            phase: AsyncPhase::Idle,
            post_errors: BTreeMap::new(),
        }
    }

    /// Replace the whole sequence with server truth.
    ///
    /// Local counters are discarded. Per-post errors survive only for ids
    /// still present. A sequence with a repeated id is refused and the
    /// current posts are kept.
    pub fn replace_posts(&mut self, posts: Vec<Post>) -> Result<(), TimelineError> {
        if let Some(id) = reactions::find_duplicate_id(&posts) {
            return Err(TimelineError::DuplicatePostId(id));
        }
        self.post_errors
            .retain(|id, _| posts.iter().any(|p| p.id == *id));
        self.posts = posts;
        Ok(())
    }

    /// See [`reactions::apply_reaction`].
    pub fn apply_reaction(&mut self, post_id: PostId, kind: ReactionKind) -> bool {
        reactions::apply_reaction(&mut self.posts, post_id, kind)
    }

    /// See [`reactions::delete_post`]. Also drops the post's error, if any.
    pub fn delete_post(&mut self, post_id: PostId) -> bool {
        let removed = reactions::delete_post(&mut self.posts, post_id);
        if removed {
            self.post_errors.remove(&post_id);
        }
        removed
    }

    /// Set or clear the per-post error of a loaded post.
    ///
    /// An empty message clears. Returns `false` (and records nothing) for an
    /// unknown id or when the error is already in that state.
    pub fn set_post_error(&mut self, post_id: PostId, error: Option<String>) -> bool {
        if !self.posts.iter().any(|p| p.id == post_id) {
            return false;
        }
        match error.filter(|message| !message.is_empty()) {
            Some(message) => self.post_errors.insert(post_id, message.clone()) != Some(message),
            None => self.post_errors.remove(&post_id).is_some(),
        }
    }

    pub fn post(&self, post_id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }
}
