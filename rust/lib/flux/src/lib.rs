//! Flux: the client state engine behind the FAVE timeline.
//!
//! Rust owns all client state and logic; a platform shell only renders
//! what it reads from the store and forwards taps as requests.
//!
//! # Three Primitives
//!
//! - `get(path)`: read state at a path
//! - `emit(path, payload)`: send a request, routed to handler(s)
//! - `subscribe(pattern)`: observe state changes
//!
//! # Path Addressing
//!
//! State and requests share a flat `/`-separated namespace:
//! - State: `identity/state`, `app/route`, `app/notice`, `timeline/feed`
//! - Requests: `identity/establish`, `timeline/react`, `timeline/delete`
//!
//! Patterns use MQTT-style wildcards: `timeline/+` matches one level,
//! `timeline/#` matches any depth, `#` matches everything.

pub mod app;
pub mod i18n;
pub mod router;
pub mod store;
pub mod topic;
pub mod value;

pub use app::Flux;
pub use i18n::{I18nHandler, I18nStore, QueryParams};
pub use router::{BoxFuture, Payload, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
