//! FAVE: timeline and reaction client for a fan community.
//!
//! Users claim an identity by username (no password), then read a
//! timeline of posts about their fave (推し) and tap reactions on them.
//!
//! - `model`: posts, reaction counters, sessions
//! - `state`: what lives in the store, one type per path
//! - `request`: typed request payloads, one per path
//! - `handlers`: what each request does to the store
//! - `view`: projections from state to screens
//! - `client`: the remote API seam and its HTTP implementation
//!
//! [`FaveApp`] wires them together over a [`fave_flux::Flux`].

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod i18n_strings;
pub mod identity;
pub mod model;
pub mod reactions;
pub mod request;
pub mod state;
pub mod view;

mod client_test;

pub use app::{FaveApp, FeedActions, OwnerActions};
pub use client::{ApiError, FaveApi, HttpFaveApi};
pub use config::ClientConfig;
pub use error::{ConfigError, FaveError, IdentityError, TimelineError};
pub use identity::IdentityClient;
