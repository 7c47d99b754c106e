//! One-time user notices, stored at `app/notice`.

/// A message shown once, then consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The identity endpoint created a new user.
    IdentityCreated,
}

impl Notice {
    pub const PATH: &'static str = "app/notice";
}
