//! Navigation, stored at `app/route`.

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Identity,
    Timeline { username: String },
}

impl AppRoute {
    pub const PATH: &'static str = "app/route";

    /// Browser-style URL of the route.
    pub fn url(&self) -> String {
        match self {
            AppRoute::Identity => "/".to_string(),
            AppRoute::Timeline { username } => {
                format!("/timeline/?name={}", urlencoding::encode(username))
            }
        }
    }
}
