//! Identity requests.

/// Username field edited.
#[derive(Debug, Clone)]
pub struct UpdateUsernameReq {
    pub value: String,
}

impl UpdateUsernameReq {
    pub const PATH: &'static str = "identity/update-input";
}

/// Submit the username (button press or Enter).
#[derive(Debug, Clone)]
pub struct EstablishIdentityReq {
    pub username: String,
}

impl EstablishIdentityReq {
    pub const PATH: &'static str = "identity/establish";
}

/// Leave the timeline and remount an empty identity screen.
#[derive(Debug, Clone)]
pub struct ResetIdentityReq;

impl ResetIdentityReq {
    pub const PATH: &'static str = "identity/reset";
}
