//! Identity client: username → session.
//!
//! There is no password. Posting a username to the identity endpoint either
//! confirms an existing user (2xx) or creates one (`201 Created`).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::client::FaveApi;
use crate::error::IdentityError;
use crate::model::Session;

pub struct IdentityClient {
    api: Arc<dyn FaveApi>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the request finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl IdentityClient {
    pub fn new(api: Arc<dyn FaveApi>) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Establish an identity for `username`.
    ///
    /// - blank after trimming: `EmptyUsername`, no request
    /// - a request already outstanding: `Busy`, no request
    /// - otherwise exactly one request; `201` sets `created`
    pub async fn establish_identity(&self, username: &str) -> Result<Session, IdentityError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(IdentityError::EmptyUsername);
        }
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            debug!(username, "identity request suppressed, one is already in flight");
            return Err(IdentityError::Busy);
        };

        let resp = self.api.establish_user(username).await?;
        let session = Session {
            username: username.to_string(),
            created: resp.created(),
        };
        info!(username, created = session.created, status = resp.status, "identity established");
        Ok(session)
    }
}
