use serde::{Deserialize, Serialize};

/// An established identity claim.
///
/// Lives only as long as the navigation to the timeline; nothing is
/// persisted and there is no token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    /// The identity endpoint answered `201 Created`.
    pub created: bool,
}
