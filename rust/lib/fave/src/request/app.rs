//! App lifecycle requests.

/// Mount the identity screen and route to it.
#[derive(Debug, Clone)]
pub struct InitializeReq;

impl InitializeReq {
    pub const PATH: &'static str = "app/initialize";
}
