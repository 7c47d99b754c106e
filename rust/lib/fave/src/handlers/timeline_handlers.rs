//! Timeline handler implementations.
//!
//! Reactions, deletes and per-post errors are synchronous single writes to
//! `timeline/feed`. Only `timeline/load` suspends, and it follows the same
//! claim / call / apply-if-still-mounted shape as identity establishment.

use fave_flux::{I18nStore, StateStore};
use tracing::{debug, info, warn};

use super::FaveContext;
use crate::error::TimelineError;
use crate::request::*;
use crate::state::*;

/// Handle `timeline/open`: mount an empty feed for the user and make
/// sure the route points at it.
pub fn handle_open(req: &OpenTimelineReq, store: &StateStore) {
    store.set(TimelineFeed::PATH, TimelineFeed::mounted(&req.username));

    let route = AppRoute::Timeline {
        username: req.username.clone(),
    };
    if store.get_as::<AppRoute>(AppRoute::PATH).as_ref() != Some(&route) {
        store.set(AppRoute::PATH, route);
    }
}

/// Handle `timeline/close`.
pub fn handle_close(store: &StateStore) {
    if store.remove(TimelineFeed::PATH).is_none() {
        debug!("timeline/close without a mounted timeline");
    }
}

/// Handle `timeline/load`: refresh the mounted feed from the server.
///
/// The fetched sequence replaces the local one wholesale. Dropped while a
/// refresh is pending; discarded if the feed was closed or remounted
/// meanwhile.
pub async fn handle_load(store: &StateStore, ctx: &FaveContext) {
    let Some((view, username)) = store.update(TimelineFeed::PATH, |feed: &mut TimelineFeed| {
        if feed.phase.is_pending() {
            return None;
        }
        feed.phase = AsyncPhase::Pending;
        Some((feed.view, feed.username.clone()))
    }) else {
        debug!("timeline load dropped, refresh outstanding or no timeline mounted");
        return;
    };

    let fetched = ctx.api.fetch_timeline(&username).await;

    let applied = store.update(TimelineFeed::PATH, |feed: &mut TimelineFeed| {
        if feed.view != view {
            return None;
        }
        let outcome = fetched
            .map_err(|e| TimelineError::Fetch(e.to_string()))
            .and_then(|posts| feed.replace_posts(posts));
        feed.phase = match &outcome {
            Ok(()) => AsyncPhase::Success,
            Err(err) => AsyncPhase::Failed(ctx.i18n.get(&err.message_key())),
        };
        Some(outcome)
    });

    match applied {
        None => debug!(%username, "timeline gone, refresh discarded"),
        Some(Ok(())) => info!(%username, "timeline refreshed"),
        Some(Err(err)) => warn!(%username, error = %err, "timeline refresh failed"),
    }
}

/// Handle `timeline/replace`: install a sequence delivered by another
/// channel.
///
/// A sequence with a repeated id is refused; the current posts stay and
/// the page shows the error.
pub fn handle_replace(
    req: &ReplacePostsReq,
    store: &StateStore,
    i18n: &I18nStore,
) -> Result<(), TimelineError> {
    let outcome = store.update(TimelineFeed::PATH, |feed: &mut TimelineFeed| {
        let outcome = feed.replace_posts(req.posts.clone());
        feed.phase = match &outcome {
            Ok(()) => AsyncPhase::Success,
            Err(err) => AsyncPhase::Failed(i18n.get(&err.message_key())),
        };
        Some(outcome)
    });
    match outcome {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => {
            warn!(error = %err, "timeline replace refused");
            Err(err)
        }
        None => {
            debug!("timeline/replace without a mounted timeline");
            Ok(())
        }
    }
}

/// Handle `timeline/react`. Returns whether a counter moved.
pub fn handle_react(req: &ReactReq, store: &StateStore) -> bool {
    let changed = store
        .update(TimelineFeed::PATH, |feed: &mut TimelineFeed| {
            feed.apply_reaction(req.post_id, req.kind).then_some(())
        })
        .is_some();
    if !changed {
        debug!(post_id = req.post_id, kind = req.kind.as_str(), "reaction on absent post ignored");
    }
    changed
}

/// Handle `timeline/delete`. Returns whether a post was removed.
pub fn handle_delete(req: &DeletePostReq, store: &StateStore) -> bool {
    let removed = store
        .update(TimelineFeed::PATH, |feed: &mut TimelineFeed| {
            feed.delete_post(req.post_id).then_some(())
        })
        .is_some();
    if !removed {
        debug!(post_id = req.post_id, "delete of absent post ignored");
    }
    removed
}

/// Handle `timeline/post-error`.
pub fn handle_post_error(req: &PostErrorReq, store: &StateStore) -> bool {
    store
        .update(TimelineFeed::PATH, |feed: &mut TimelineFeed| {
            feed.set_post_error(req.post_id, req.error.clone()).then_some(())
        })
        .is_some()
}
