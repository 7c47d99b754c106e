//! App lifecycle handler implementations.

use fave_flux::StateStore;
use tracing::debug;

use crate::state::*;

/// Handle `app/initialize`: an empty identity screen.
pub fn handle_initialize(store: &StateStore) {
    store.set(IdentityState::PATH, IdentityState::mounted());
    store.set(AppRoute::PATH, AppRoute::Identity);
}

/// Handle `identity/reset`: drop the timeline and the session, back to a
/// freshly mounted identity screen.
///
/// A refresh still in flight for the old timeline finds its view gone and
/// is discarded.
pub fn handle_reset(store: &StateStore) {
    if store.remove(TimelineFeed::PATH).is_some() {
        debug!("timeline torn down");
    }
    store.remove(Notice::PATH);
    handle_initialize(store);
}
