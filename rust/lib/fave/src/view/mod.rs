//! View projections.
//!
//! Pure functions from state to what a screen shows. Rendering proper
//! (layout, styling) belongs to the host.

pub mod card;
pub mod identity;
pub mod text;
pub mod time;
pub mod timeline;

pub use card::{DeleteButton, PostCard, PostContent, ReactionButton};
pub use identity::{IdentityScreen, project_identity};
pub use text::{render_identity, render_timeline};
pub use time::format_timestamp;
pub use timeline::{Deletable, TimelineHost, TimelineView, project_timeline};
