//! `FaveApp`: the client facade a host drives.
//!
//! Owns a [`Flux`] with every handler registered. Async operations go
//! through the router; taps on the timeline are applied synchronously
//! through [`FeedActions`] / [`OwnerActions`].

use std::path::Path;
use std::sync::Arc;

use fave_flux::{Flux, I18nStore, StateStore};

use crate::client::{FaveApi, HttpFaveApi};
use crate::config::ClientConfig;
use crate::error::{FaveError, TimelineError};
use crate::handlers::{FaveContext, register_handlers, timeline_handlers};
use crate::i18n_strings;
use crate::model::{Post, PostId, ReactionKind};
use crate::request::*;
use crate::state::*;
use crate::view::{
    Deletable, IdentityScreen, TimelineHost, TimelineView, project_identity, project_timeline,
};

pub struct FaveApp {
    flux: Flux,
    i18n: Arc<I18nStore>,
}

impl FaveApp {
    /// Build against the HTTP API described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, FaveError> {
        let api = HttpFaveApi::new(config)?;
        Ok(Self::with_api(Arc::new(api), &config.locale))
    }

    /// Load the config file at `path` (defaults when absent) and build.
    pub fn from_config_file(path: &Path) -> Result<Self, FaveError> {
        Self::new(&ClientConfig::load(path)?)
    }

    /// Build against any [`FaveApi`].
    pub fn with_api(api: Arc<dyn FaveApi>, locale: &str) -> Self {
        let i18n = Arc::new(I18nStore::new(locale));
        i18n_strings::register_all(&i18n);
        let flux = Flux::new();
        register_handlers(&flux, Arc::new(FaveContext::new(api, i18n.clone())));
        Self { flux, i18n }
    }

    pub fn flux(&self) -> &Flux {
        &self.flux
    }

    pub fn i18n(&self) -> &I18nStore {
        &self.i18n
    }

    // ── Identity ──

    pub async fn initialize(&self) {
        self.flux.emit(InitializeReq::PATH, InitializeReq).await;
    }

    pub async fn update_username(&self, value: &str) {
        let req = UpdateUsernameReq { value: value.to_string() };
        self.flux.emit(UpdateUsernameReq::PATH, req).await;
    }

    /// Submit `username`. On success the route is the user's timeline,
    /// already loaded.
    pub async fn establish_identity(&self, username: &str) {
        let req = EstablishIdentityReq { username: username.to_string() };
        self.flux.emit(EstablishIdentityReq::PATH, req).await;
    }

    /// Back to an empty identity screen.
    pub async fn reset(&self) {
        self.flux.emit(ResetIdentityReq::PATH, ResetIdentityReq).await;
    }

    /// The pending one-time notice, removed on read.
    pub fn take_notice(&self) -> Option<Notice> {
        self.flux.store().remove(Notice::PATH)?.downcast_cloned()
    }

    pub fn route(&self) -> Option<AppRoute> {
        self.flux.get_as(AppRoute::PATH)
    }

    pub fn session(&self) -> Option<crate::model::Session> {
        self.flux.get_as::<IdentityState>(IdentityState::PATH)?.session
    }

    pub fn identity_screen(&self) -> Option<IdentityScreen> {
        let state = self.flux.get_as::<IdentityState>(IdentityState::PATH)?;
        Some(project_identity(&state, &self.i18n))
    }

    // ── Timeline ──

    pub async fn open_timeline(&self, username: &str) {
        let req = OpenTimelineReq { username: username.to_string() };
        self.flux.emit(OpenTimelineReq::PATH, req).await;
    }

    pub async fn load_timeline(&self) {
        self.flux.emit(LoadTimelineReq::PATH, LoadTimelineReq).await;
    }

    pub fn replace_posts(&self, posts: Vec<Post>) -> Result<(), TimelineError> {
        timeline_handlers::handle_replace(&ReplacePostsReq { posts }, self.flux.store(), &self.i18n)
    }

    pub fn react(&self, post_id: PostId, kind: ReactionKind) -> bool {
        self.feed_actions().react(post_id, kind)
    }

    pub fn delete_post(&self, post_id: PostId) -> bool {
        self.owner_actions().delete(post_id)
    }

    /// Set or clear the per-post error supplied by an upstream collaborator.
    pub fn set_post_error(&self, post_id: PostId, error: Option<String>) -> bool {
        timeline_handlers::handle_post_error(&PostErrorReq { post_id, error }, self.flux.store())
    }

    pub async fn close_timeline(&self) {
        self.flux.emit(CloseTimelineReq::PATH, CloseTimelineReq).await;
    }

    pub fn timeline(&self) -> Option<TimelineFeed> {
        self.flux.get_as(TimelineFeed::PATH)
    }

    /// Project the mounted timeline for `host`.
    pub fn timeline_view(&self, host: &dyn TimelineHost) -> Option<Result<TimelineView, TimelineError>> {
        let feed = self.timeline()?;
        Some(project_timeline(&feed, host, &self.i18n))
    }

    /// Reactions only.
    pub fn feed_actions(&self) -> FeedActions {
        FeedActions {
            store: Arc::clone(self.flux.store()),
        }
    }

    /// Reactions and delete.
    pub fn owner_actions(&self) -> OwnerActions {
        OwnerActions(self.feed_actions())
    }
}

/// Timeline host without the delete capability.
#[derive(Clone)]
pub struct FeedActions {
    store: Arc<StateStore>,
}

impl TimelineHost for FeedActions {
    fn react(&self, post_id: PostId, kind: ReactionKind) -> bool {
        timeline_handlers::handle_react(&ReactReq { post_id, kind }, &self.store)
    }
}

/// Timeline host that may delete posts.
#[derive(Clone)]
pub struct OwnerActions(FeedActions);

impl TimelineHost for OwnerActions {
    fn react(&self, post_id: PostId, kind: ReactionKind) -> bool {
        self.0.react(post_id, kind)
    }

    fn as_deletable(&self) -> Option<&dyn Deletable> {
        Some(self)
    }
}

impl Deletable for OwnerActions {
    fn delete(&self, post_id: PostId) -> bool {
        timeline_handlers::handle_delete(&DeletePostReq { post_id }, &self.0.store)
    }
}
