//! Client-side entities.

pub mod post;
pub mod session;

pub use post::{Post, PostId, ReactionKind, Reactions};
pub use session::Session;
