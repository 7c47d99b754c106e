use std::sync::{PoisonError, RwLock};

/// Check whether a concrete topic matches an MQTT-style pattern.
///
/// - `+` matches exactly one level
/// - `#` matches any number of remaining levels, including none, and must
///   be the last segment
///
/// ```ignore
/// assert!(matches("timeline/+", "timeline/feed"));
/// assert!(matches("timeline/#", "timeline"));
/// assert!(!matches("timeline/+", "timeline/feed/1"));
/// ```
pub fn matches(pattern: &str, topic: &str) -> bool {
    let mut pat = pattern.split('/');
    let mut top = topic.split('/');
    loop {
        match (pat.next(), top.next()) {
            (Some("#"), _) => return true,
            (Some("+"), Some(_)) => {}
            (Some(p), Some(t)) if p == t => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// A registry of values keyed by topic pattern.
///
/// Lookups scan every registered pattern. The tables in this engine hold a
/// handful of handlers and subscribers per app, so registration order is
/// kept and used as the match order.
pub struct TopicTable<T> {
    entries: RwLock<Vec<(String, T)>>,
}

impl<T: Clone> TopicTable<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register `value` under `pattern`.
    pub fn insert(&self, pattern: &str, value: T) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((pattern.to_string(), value));
    }

    /// All values whose pattern matches `topic`, in registration order.
    pub fn match_topic(&self, topic: &str) -> Vec<T> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(pattern, _)| matches(pattern, topic))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Remove values registered under exactly `pattern` that satisfy
    /// `predicate`. Returns `true` if anything was removed.
    pub fn remove<F>(&self, pattern: &str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(p, value)| !(p == pattern && predicate(value)));
        entries.len() < before
    }

}

impl<T: Clone> Default for TopicTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
