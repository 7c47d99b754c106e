//! Timeline requests.

use crate::model::{Post, PostId, ReactionKind};

/// Mount an empty timeline scoped to `username`.
#[derive(Debug, Clone)]
pub struct OpenTimelineReq {
    pub username: String,
}

impl OpenTimelineReq {
    pub const PATH: &'static str = "timeline/open";
}

/// Refresh the mounted timeline from the server.
#[derive(Debug, Clone)]
pub struct LoadTimelineReq;

impl LoadTimelineReq {
    pub const PATH: &'static str = "timeline/load";
}

/// Replace the whole post sequence (posts delivered by another channel).
#[derive(Debug, Clone)]
pub struct ReplacePostsReq {
    pub posts: Vec<Post>,
}

impl ReplacePostsReq {
    pub const PATH: &'static str = "timeline/replace";
}

/// One reaction tap.
#[derive(Debug, Clone)]
pub struct ReactReq {
    pub post_id: PostId,
    pub kind: ReactionKind,
}

impl ReactReq {
    pub const PATH: &'static str = "timeline/react";
}

/// Delete tap.
#[derive(Debug, Clone)]
pub struct DeletePostReq {
    pub post_id: PostId,
}

impl DeletePostReq {
    pub const PATH: &'static str = "timeline/delete";
}

/// Set (`Some`) or clear (`None`) a per-post error.
#[derive(Debug, Clone)]
pub struct PostErrorReq {
    pub post_id: PostId,
    pub error: Option<String>,
}

impl PostErrorReq {
    pub const PATH: &'static str = "timeline/post-error";
}

/// Tear down the timeline view. Late refresh results are discarded.
#[derive(Debug, Clone)]
pub struct CloseTimelineReq;

impl CloseTimelineReq {
    pub const PATH: &'static str = "timeline/close";
}
