use thiserror::Error;

use crate::client::ApiError;
use crate::model::PostId;

/// Identity handshake failures.
///
/// `Display` is for logs. What the user sees comes from
/// [`IdentityError::message_key`] through the i18n store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Blank after trimming. No request was sent.
    #[error("username is empty")]
    EmptyUsername,

    /// The server answered with a non-2xx status. Carries `"{code} {reason}"`.
    #[error("invalid username: {0}")]
    IdentityRejected(String),

    /// Transport failure, timeout, or an unparseable body.
    #[error("identity service unreachable: {0}")]
    IdentityUnreachable(String),

    /// Another request from the same affordance is still outstanding.
    #[error("identity request already in flight")]
    Busy,
}

impl IdentityError {
    /// i18n path of the message shown under the username field.
    pub fn message_key(&self) -> &'static str {
        match self {
            IdentityError::EmptyUsername => "error/identity/empty",
            IdentityError::IdentityRejected(_) | IdentityError::IdentityUnreachable(_) => {
                "error/identity/failed"
            }
            IdentityError::Busy => "error/identity/busy",
        }
    }

    /// i18n URL of the localized rejection detail, with the server status.
    pub fn detail_key(&self) -> Option<String> {
        match self {
            IdentityError::IdentityRejected(status) => Some(format!(
                "error/identity/rejected?status={}",
                urlencoding::encode(status)
            )),
            _ => None,
        }
    }
}

impl From<ApiError> for IdentityError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Server { status, message } => {
                IdentityError::IdentityRejected(format!("{} {}", status, message))
            }
            other => IdentityError::IdentityUnreachable(other.to_string()),
        }
    }
}

/// Timeline load and invariant failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// Two posts share an id, so actions could not be routed.
    #[error("duplicate post id {0} in timeline")]
    DuplicatePostId(PostId),

    #[error("timeline fetch failed: {0}")]
    Fetch(String),
}

impl TimelineError {
    /// i18n path of the page-level message.
    pub fn message_key(&self) -> String {
        match self {
            TimelineError::DuplicatePostId(id) => format!("error/timeline/duplicate?id={}", id),
            TimelineError::Fetch(_) => "error/timeline/load_failed".to_string(),
        }
    }
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Errors surfaced while building the client.
#[derive(Error, Debug)]
pub enum FaveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
