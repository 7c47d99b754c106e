//! Reaction update controller.
//!
//! Local, optimistic mutations of the post sequence. Every tap is its own
//! event: nothing is de-duplicated per user and nothing waits for the
//! server. The next full refresh replaces these counters with server truth.
//!
//! An id that is not in the sequence is a tolerated race (the post was
//! already removed or never loaded): the call changes nothing and reports
//! `false`.

use std::collections::HashSet;

use crate::model::{Post, PostId, ReactionKind};

/// Add one `kind` reaction to the post with `post_id`.
///
/// Exactly one counter of exactly one post changes. Returns whether the
/// post was found.
pub fn apply_reaction(posts: &mut [Post], post_id: PostId, kind: ReactionKind) -> bool {
    match posts.iter_mut().find(|p| p.id == post_id) {
        Some(post) => {
            post.reactions.increment(kind);
            true
        }
        None => false,
    }
}

/// Remove the post with `post_id`. Idempotent.
pub fn delete_post(posts: &mut Vec<Post>, post_id: PostId) -> bool {
    match posts.iter().position(|p| p.id == post_id) {
        Some(index) => {
            posts.remove(index);
            true
        }
        None => false,
    }
}

/// First id that appears twice, if any.
pub fn find_duplicate_id(posts: &[Post]) -> Option<PostId> {
    let mut seen = HashSet::with_capacity(posts.len());
    posts.iter().map(|p| p.id).find(|id| !seen.insert(*id))
}
