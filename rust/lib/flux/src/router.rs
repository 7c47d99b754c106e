use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::store::StateStore;
use crate::topic::TopicTable;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased request payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Type-erased handler stored in the router.
///
/// Takes owned values so the returned future can be `'static`.
type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// Request router: maps path patterns to async handlers.
///
/// Multiple handlers may match one path; they run sequentially in
/// registration order. A path with no handler is a silent no-op.
pub struct Router {
    table: TopicTable<ErasedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            table: TopicTable::new(),
        }
    }

    /// Register an async handler for a path pattern (`+` / `#` wildcards).
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(
            move |path: String, payload: Payload, store: Arc<StateStore>| -> BoxFuture {
                Box::pin(handler(path, payload, store))
            },
        );
        self.table.insert(pattern, handler);
    }

    /// Dispatch a request to every matching handler, awaiting each in turn.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) {
        for handler in self.table.match_topic(path) {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }

    /// Whether any handler would match the concrete `path`.
    pub fn matches(&self, path: &str) -> bool {
        !self.table.match_topic(path).is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
