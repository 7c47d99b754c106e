//! Client state definitions.
//!
//! Each file defines one state type stored at a well-known path. The view
//! layer reads these and nothing else.

pub mod identity;
pub mod notice;
pub mod phase;
pub mod route;
pub mod timeline;

pub use identity::IdentityState;
pub use notice::{Notice, NoticeKind};
pub use phase::AsyncPhase;
pub use route::AppRoute;
pub use timeline::TimelineFeed;

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one mounted instance of a screen.
///
/// An async handler captures the id when it starts and only writes its
/// result back if the same instance is still mounted, so a torn-down view
/// never receives a late answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
