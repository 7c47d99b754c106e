use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::topic::TopicTable;
use crate::value::{StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Per-path state store with pattern-routed change notifications.
///
/// - `set(path, value)` stores a value and notifies matching subscribers.
/// - `update(path, f)` is an atomic read-modify-write of a typed value.
/// - `get(path)` / `get_as::<T>(path)` read the current value.
/// - `subscribe(pattern, handler)` registers a change handler.
///
/// Subscribers run synchronously on the caller of `set`/`update`, after the
/// value lock is released, so a handler may read the store it observes.
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    handlers: TopicTable<HandlerEntry>,
    next_id: AtomicU64,
}

#[derive(Clone)]
struct HandlerEntry {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            handlers: TopicTable::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Set a typed value at `path` and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Set a pre-built `StateValue` at `path` and notify matching subscribers.
    pub fn set_value(&self, path: &str, value: StateValue) {
        {
            let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
            values.insert(path.to_string(), value.clone());
        }
        self.notify(path, &value);
    }

    /// Atomically modify the `T` stored at `path`.
    ///
    /// `f` receives an owned copy of the current value. Returning `Some`
    /// commits the copy and notifies subscribers; returning `None` leaves
    /// the stored value untouched and notifies nobody. The whole
    /// read-modify-write happens under one write lock, so two concurrent
    /// updates never observe the same starting value.
    ///
    /// Returns `None` when nothing of type `T` is stored at `path`.
    pub fn update<T, R, F>(&self, path: &str, f: F) -> Option<R>
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce(&mut T) -> Option<R>,
    {
        let (committed, result) = {
            let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
            let mut current = values.get(path)?.downcast_cloned::<T>()?;
            let result = f(&mut current)?;
            let committed = StateValue::new(current);
            values.insert(path.to_string(), committed.clone());
            (committed, result)
        };
        self.notify(path, &committed);
        Some(result)
    }

    /// Current value at `path` (shared, no data copy).
    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.get(path).cloned()
    }

    /// Current value at `path`, cloned out as `T`.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(|v| v.downcast_cloned::<T>())
    }

    /// Remove the value at `path`. Does NOT notify subscribers.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.contains_key(path)
    }

    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to changes on paths matching `pattern` (`+` / `#` wildcards).
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.insert(
            pattern,
            HandlerEntry {
                id,
                handler: Arc::new(handler),
            },
        );
        id
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.handlers.remove(pattern, |entry| entry.id == id);
    }

    fn notify(&self, path: &str, value: &StateValue) {
        for entry in self.handlers.match_topic(path) {
            (entry.handler)(path, value);
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
