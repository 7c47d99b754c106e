//! Request definitions.
//!
//! Each struct is a typed request payload with a `PATH` const; handlers
//! are registered under the same path in [`crate::handlers`].

pub mod app;
pub mod identity;
pub mod timeline;

pub use app::InitializeReq;
pub use identity::{EstablishIdentityReq, ResetIdentityReq, UpdateUsernameReq};
pub use timeline::{
    CloseTimelineReq, DeletePostReq, LoadTimelineReq, OpenTimelineReq, PostErrorReq, ReactReq,
    ReplacePostsReq,
};
