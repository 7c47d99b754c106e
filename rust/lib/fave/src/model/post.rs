use serde::{Deserialize, Serialize};

/// Server-assigned post identifier. The only routing key for actions.
pub type PostId = i64;

/// The four reaction kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Like,
    Watch,
    Love,
    NewListener,
}

impl ReactionKind {
    /// Fixed render order: like, watch, love, new_listener.
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Like,
        ReactionKind::Watch,
        ReactionKind::Love,
        ReactionKind::NewListener,
    ];

    /// Wire name, as used in the `reactions` object.
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Watch => "watch",
            ReactionKind::Love => "love",
            ReactionKind::NewListener => "new_listener",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ReactionKind::Like => "👍",
            ReactionKind::Watch => "👀",
            ReactionKind::Love => "💘",
            ReactionKind::NewListener => "🆕",
        }
    }
}

/// Aggregated reaction counters of one post.
///
/// Counters only go up on the client; a server refresh replaces them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub like: u64,
    pub watch: u64,
    pub love: u64,
    pub new_listener: u64,
}

impl Reactions {
    pub fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Watch => self.watch,
            ReactionKind::Love => self.love,
            ReactionKind::NewListener => self.new_listener,
        }
    }

    /// Add one reaction event of `kind`.
    pub fn increment(&mut self, kind: ReactionKind) {
        let counter = match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Watch => &mut self.watch,
            ReactionKind::Love => &mut self.love,
            ReactionKind::NewListener => &mut self.new_listener,
        };
        *counter = counter.saturating_add(1);
    }
}

/// A timeline post about a fave.
///
/// `fave_name` is the fave's display name captured when the post was
/// written. It is not re-fetched, so a renamed fave keeps its old name on
/// older posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub message: String,
    pub fave_id: i64,
    pub date_time: String,
    pub fave_name: String,
    #[serde(default)]
    pub reactions: Reactions,
}
