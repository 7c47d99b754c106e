//! Identity screen state, stored at `identity/state`.

use super::{AsyncPhase, ViewId};
use crate::model::Session;

/// What the identity screen shows: the typed username, the handshake
/// phase, and the session once established.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityState {
    pub view: ViewId,
    pub input: String,
    pub phase: AsyncPhase,
    pub session: Option<Session>,
}

impl IdentityState {
    pub const PATH: &'static str = "identity/state";

    /// A freshly mounted, empty identity screen.
    pub fn mounted() -> Self {
        Self {
            view: ViewId::next(),
            input: String::new(),
            phase: AsyncPhase::Idle,
            session: None,
        }
    }
}
