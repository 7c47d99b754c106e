//! Identity handler implementations.
//!
//! The identity screen is a small state machine on `IdentityState::phase`:
//!
//! ```text
//! Idle ──submit──▶ Pending ──2xx──▶ Success (route → timeline)
//!   ▲                 │
//!   └──edit── Failed ◀┘ non-2xx / transport / blank / busy
//! ```
//!
//! A submit while `Pending` is dropped without a request. A submit from a
//! fresh screen while an earlier screen's request is still in flight fails
//! with the busy message.

use fave_flux::StateStore;
use tracing::{debug, warn};

use super::FaveContext;
use crate::error::IdentityError;
use crate::model::Session;
use crate::request::*;
use crate::state::*;

/// Handle `identity/update-input`.
///
/// Editing clears a previous failure.
pub fn handle_update_input(req: &UpdateUsernameReq, store: &StateStore) {
    store.update(IdentityState::PATH, |state: &mut IdentityState| {
        state.input = req.value.clone();
        if state.phase.error().is_some() {
            state.phase = AsyncPhase::Idle;
        }
        Some(())
    });
}

/// Handle `identity/establish`.
///
/// Returns the session when the route switched to the timeline.
pub async fn handle_establish(
    req: &EstablishIdentityReq,
    store: &StateStore,
    ctx: &FaveContext,
) -> Option<Session> {
    let username = req.username.trim();
    if username.is_empty() {
        let message = ctx.i18n.get(IdentityError::EmptyUsername.message_key());
        store.update(IdentityState::PATH, |state: &mut IdentityState| {
            if state.phase.is_pending() {
                return None;
            }
            state.phase = AsyncPhase::Failed(message);
            Some(())
        });
        return None;
    }

    // Claim the affordance. Fails when unmounted or already pending.
    let Some(view) = store.update(IdentityState::PATH, |state: &mut IdentityState| {
        if state.phase.is_pending() {
            return None;
        }
        state.phase = AsyncPhase::Pending;
        Some(state.view)
    }) else {
        debug!(username, "identity submit dropped, request outstanding or screen not mounted");
        return None;
    };

    let result = ctx.identity.establish_identity(username).await;

    let (phase, session) = match &result {
        Ok(session) => (AsyncPhase::Success, Some(session.clone())),
        // A request from an earlier screen is still in flight.
        Err(err @ IdentityError::Busy) => {
            debug!(username, "identity client busy, submit refused");
            (AsyncPhase::Failed(ctx.i18n.get(err.message_key())), None)
        }
        Err(err) => {
            let detail = err.detail_key().map(|key| ctx.i18n.get(&key));
            warn!(username, error = %err, detail = detail.as_deref(), "identity request failed");
            (AsyncPhase::Failed(ctx.i18n.get(err.message_key())), None)
        }
    };

    let applied = store.update(IdentityState::PATH, move |state: &mut IdentityState| {
        if state.view != view {
            return None;
        }
        state.phase = phase;
        state.session = session;
        Some(())
    });
    if applied.is_none() {
        debug!(username, "identity screen gone, result discarded");
        return None;
    }

    let session = result.ok()?;
    if session.created {
        store.set(
            Notice::PATH,
            Notice {
                kind: NoticeKind::IdentityCreated,
                text: ctx.i18n.get("notice/identity_created"),
            },
        );
    }
    store.set(
        AppRoute::PATH,
        AppRoute::Timeline {
            username: session.username.clone(),
        },
    );
    Some(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use fave_flux::I18nStore;
    use tokio::sync::Notify;

    use crate::client::ApiError;
    use crate::handlers::app_handlers::{self, handle_initialize};
    use crate::i18n_strings;
    use crate::identity::tests::ScriptedApi;

    fn setup(api: ScriptedApi) -> (StateStore, FaveContext, Arc<ScriptedApi>) {
        let api = Arc::new(api);
        let i18n = Arc::new(I18nStore::new("ja"));
        i18n_strings::register_all(&i18n);
        let store = StateStore::new();
        handle_initialize(&store);
        (store, FaveContext::new(api.clone(), i18n), api)
    }

    fn establish(username: &str) -> EstablishIdentityReq {
        EstablishIdentityReq { username: username.into() }
    }

    fn identity(store: &StateStore) -> IdentityState {
        store.get_as(IdentityState::PATH).unwrap()
    }

    #[tokio::test]
    async fn created_user_gets_exactly_one_notice() {
        let (store, ctx, api) = setup(ScriptedApi::answering(201));
        let notices = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let n = notices.clone();
        store.subscribe(Notice::PATH, move |_, _| {
            n.fetch_add(1, Ordering::SeqCst);
        });

        let session = handle_establish(&establish("newuser"), &store, &ctx).await.unwrap();

        assert_eq!(session, Session { username: "newuser".into(), created: true });
        assert_eq!(notices.load(Ordering::SeqCst), 1);
        assert_eq!(identity(&store).phase, AsyncPhase::Success);
        assert_eq!(
            store.get_as::<AppRoute>(AppRoute::PATH),
            Some(AppRoute::Timeline { username: "newuser".into() })
        );
        assert_eq!(api.identity_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn existing_user_transitions_without_notice() {
        let (store, ctx, _) = setup(ScriptedApi::answering(200));

        let session = handle_establish(&establish("alice"), &store, &ctx).await.unwrap();

        assert!(!session.created);
        assert!(!store.contains(Notice::PATH));
        assert_eq!(
            store.get_as::<AppRoute>(AppRoute::PATH),
            Some(AppRoute::Timeline { username: "alice".into() })
        );
    }

    #[tokio::test]
    async fn blank_input_fails_locally() {
        let (store, ctx, api) = setup(ScriptedApi::default());

        assert!(handle_establish(&establish("   "), &store, &ctx).await.is_none());

        assert_eq!(
            identity(&store).phase,
            AsyncPhase::Failed("ユーザー名を入力してください。".into())
        );
        assert_eq!(api.identity_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.get_as::<AppRoute>(AppRoute::PATH), Some(AppRoute::Identity));
    }

    #[tokio::test]
    async fn rejection_stays_on_identity_screen() {
        let api = ScriptedApi::default();
        api.identity.lock().unwrap().push_back(Err(ApiError::Server {
            status: 404,
            message: "Not Found".into(),
        }));
        let (store, ctx, _) = setup(api);

        assert!(handle_establish(&establish("ghost"), &store, &ctx).await.is_none());

        let state = identity(&store);
        assert_eq!(
            state.phase.error(),
            Some("ログインに失敗しました。ユーザー名を確認してください。")
        );
        assert!(state.session.is_none());
        assert_eq!(store.get_as::<AppRoute>(AppRoute::PATH), Some(AppRoute::Identity));
    }

    #[tokio::test]
    async fn editing_clears_failure() {
        let (store, ctx, _) = setup(ScriptedApi::default());
        handle_establish(&establish(""), &store, &ctx).await;
        assert!(identity(&store).phase.error().is_some());

        handle_update_input(&UpdateUsernameReq { value: "a".into() }, &store);

        let state = identity(&store);
        assert_eq!(state.input, "a");
        assert_eq!(state.phase, AsyncPhase::Idle);
    }

    #[tokio::test]
    async fn submit_while_pending_is_dropped() {
        let gate = Arc::new(Notify::new());
        let (store, ctx, api) = setup(ScriptedApi {
            gate: Some(gate.clone()),
            ..ScriptedApi::answering(200)
        });

        let req = establish("alice");
        let first = handle_establish(&req, &store, &ctx);
        let second = async {
            tokio::task::yield_now().await;
            assert!(identity(&store).phase.is_pending());
            let result = handle_establish(&req, &store, &ctx).await;
            gate.notify_one();
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(api.identity_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn result_for_torn_down_screen_is_discarded() {
        let gate = Arc::new(Notify::new());
        let (store, ctx, _) = setup(ScriptedApi {
            gate: Some(gate.clone()),
            ..ScriptedApi::answering(201)
        });

        let req = establish("alice");
        let pending = handle_establish(&req, &store, &ctx);
        let remount = async {
            tokio::task::yield_now().await;
            handle_initialize(&store);
            gate.notify_one();
        };
        let (result, ()) = tokio::join!(pending, remount);

        assert!(result.is_none());
        assert_eq!(identity(&store).phase, AsyncPhase::Idle);
        assert!(!store.contains(Notice::PATH));
        assert_eq!(store.get_as::<AppRoute>(AppRoute::PATH), Some(AppRoute::Identity));
    }

    #[tokio::test]
    async fn resubmit_after_reset_while_outstanding_reports_busy() {
        let gate = Arc::new(Notify::new());
        let (store, ctx, api) = setup(ScriptedApi {
            gate: Some(gate.clone()),
            ..ScriptedApi::answering(200)
        });

        let first_req = establish("alice");
        let second_req = establish("bob");
        let first = handle_establish(&first_req, &store, &ctx);
        let reset_then_resubmit = async {
            tokio::task::yield_now().await;
            app_handlers::handle_reset(&store);
            let second = handle_establish(&second_req, &store, &ctx).await;
            assert_eq!(
                identity(&store).phase,
                AsyncPhase::Failed("処理中です。しばらくお待ちください。".into())
            );
            gate.notify_one();
            second
        };
        let (first, second) = tokio::join!(first, reset_then_resubmit);

        assert!(first.is_none());
        assert!(second.is_none());
        assert_eq!(api.identity_calls.load(Ordering::SeqCst), 1);
        let state = identity(&store);
        assert_eq!(state.phase.error(), Some("処理中です。しばらくお待ちください。"));
        assert!(state.session.is_none());
        assert_eq!(store.get_as::<AppRoute>(AppRoute::PATH), Some(AppRoute::Identity));
    }
}
