//! Handler implementations and Flux wiring.
//!
//! `register_handlers` maps each request `PATH` to its handler: downcast
//! the payload, hand the handler the store and whatever part of the
//! context it needs.

pub mod app_handlers;
pub mod identity_handlers;
pub mod timeline_handlers;

use std::sync::Arc;

use fave_flux::{Flux, I18nStore, Payload, StateStore};
use tracing::warn;

use crate::client::FaveApi;
use crate::identity::IdentityClient;
use crate::request::*;

/// What the handlers need beyond the store.
pub struct FaveContext {
    pub api: Arc<dyn FaveApi>,
    pub identity: IdentityClient,
    pub i18n: Arc<I18nStore>,
}

impl FaveContext {
    pub fn new(api: Arc<dyn FaveApi>, i18n: Arc<I18nStore>) -> Self {
        Self {
            identity: IdentityClient::new(api.clone()),
            api,
            i18n,
        }
    }
}

fn payload<'a, T: 'static>(path: &str, payload: &'a Payload) -> Option<&'a T> {
    let req = payload.downcast_ref::<T>();
    if req.is_none() {
        warn!(path, "request payload has the wrong type, dropped");
    }
    req
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<FaveContext>) {
    // app/initialize
    flux.on(InitializeReq::PATH, |_, _, store: Arc<StateStore>| async move {
        app_handlers::handle_initialize(&store);
    });

    // identity/update-input
    flux.on(UpdateUsernameReq::PATH, |path, p, store: Arc<StateStore>| async move {
        let Some(req) = payload::<UpdateUsernameReq>(&path, &p) else { return };
        identity_handlers::handle_update_input(req, &store);
    });

    // identity/establish
    {
        let ctx = ctx.clone();
        flux.on(EstablishIdentityReq::PATH, move |path, p, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload::<EstablishIdentityReq>(&path, &p) else { return };
                let Some(session) = identity_handlers::handle_establish(req, &store, &ctx).await
                else {
                    return;
                };
                // Mount and fill the timeline right after the route switch.
                timeline_handlers::handle_open(
                    &OpenTimelineReq { username: session.username },
                    &store,
                );
                timeline_handlers::handle_load(&store, &ctx).await;
            }
        });
    }

    // identity/reset
    flux.on(ResetIdentityReq::PATH, |_, _, store: Arc<StateStore>| async move {
        app_handlers::handle_reset(&store);
    });

    // timeline/open
    flux.on(OpenTimelineReq::PATH, |path, p, store: Arc<StateStore>| async move {
        let Some(req) = payload::<OpenTimelineReq>(&path, &p) else { return };
        timeline_handlers::handle_open(req, &store);
    });

    // timeline/load
    {
        let ctx = ctx.clone();
        flux.on(LoadTimelineReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                timeline_handlers::handle_load(&store, &ctx).await;
            }
        });
    }

    // timeline/replace
    {
        let ctx = ctx.clone();
        flux.on(ReplacePostsReq::PATH, move |path, p, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload::<ReplacePostsReq>(&path, &p) else { return };
                let _ = timeline_handlers::handle_replace(req, &store, &ctx.i18n);
            }
        });
    }

    // timeline/react
    flux.on(ReactReq::PATH, |path, p, store: Arc<StateStore>| async move {
        let Some(req) = payload::<ReactReq>(&path, &p) else { return };
        timeline_handlers::handle_react(req, &store);
    });

    // timeline/delete
    flux.on(DeletePostReq::PATH, |path, p, store: Arc<StateStore>| async move {
        let Some(req) = payload::<DeletePostReq>(&path, &p) else { return };
        timeline_handlers::handle_delete(req, &store);
    });

    // timeline/post-error
    flux.on(PostErrorReq::PATH, |path, p, store: Arc<StateStore>| async move {
        let Some(req) = payload::<PostErrorReq>(&path, &p) else { return };
        timeline_handlers::handle_post_error(req, &store);
    });

    // timeline/close
    flux.on(CloseTimelineReq::PATH, |_, _, store: Arc<StateStore>| async move {
        timeline_handlers::handle_close(&store);
    });
}
