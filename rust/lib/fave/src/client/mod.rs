//! Remote FAVE API.
//!
//! [`FaveApi`] is the seam between the state machine and the network:
//! handlers only see this trait, [`HttpFaveApi`] talks REST over reqwest,
//! and tests substitute in-memory implementations.

mod http;

pub use http::HttpFaveApi;

use crate::model::Post;

// ── Error ───────────────────────────────────────────────────────────

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the status text.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

// ── Responses ───────────────────────────────────────────────────────

/// Successful answer of the identity endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityResponse {
    pub status: u16,
    /// JSON body. Its shape is not interpreted by this client.
    pub body: serde_json::Value,
}

impl IdentityResponse {
    /// `201 Created` means the username did not exist before this call.
    pub fn created(&self) -> bool {
        self.status == 201
    }
}

// ── FaveApi ─────────────────────────────────────────────────────────

#[async_trait::async_trait]
pub trait FaveApi: Send + Sync + 'static {
    /// `POST /api/users/{username}`: confirm or implicitly create an
    /// identity. Exactly one request, no retry.
    async fn establish_user(&self, username: &str) -> Result<IdentityResponse, ApiError>;

    /// Fetch the timeline scoped to `username`, in server order.
    async fn fetch_timeline(&self, username: &str) -> Result<Vec<Post>, ApiError>;
}
