//! I18nStore: synchronous, path-based translation.
//!
//! UI text is addressed like state, by path, with optional query
//! arguments: `i18n.get("ui/reaction/like?count=3")`. Handlers are
//! registered per pattern and receive the path, the parsed query and the
//! current locale.

use std::sync::{Arc, PoisonError, RwLock};

use crate::topic::TopicTable;

// ── QueryParams ──

/// Parsed query string: `count=3&status=Not%20Found`.
///
/// Values are percent-decoded.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse a query string (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        Self(
            query
                .split('&')
                .filter(|s| !s.is_empty())
                .filter_map(|pair| {
                    let (k, v) = pair.split_once('=')?;
                    let v = urlencoding::decode(v)
                        .map(|d| d.into_owned())
                        .unwrap_or_else(|_| v.to_string());
                    Some((k.to_string(), v))
                })
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── I18nHandler ──

/// A translation handler registered for a path pattern.
pub trait I18nHandler: Send + Sync + 'static {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String;
}

impl<F> I18nHandler for F
where
    F: Fn(&str, &QueryParams, &str) -> String + Send + Sync + 'static,
{
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        (self)(path, query, locale)
    }
}

// ── I18nStore ──

pub struct I18nStore {
    handlers: TopicTable<Arc<dyn I18nHandler>>,
    locale: RwLock<String>,
}

impl I18nStore {
    pub fn new(locale: &str) -> Self {
        Self {
            handlers: TopicTable::new(),
            locale: RwLock::new(locale.to_string()),
        }
    }

    /// Register a translation handler for a path pattern.
    pub fn handle(&self, pattern: &str, handler: Arc<dyn I18nHandler>) {
        self.handlers.insert(pattern, handler);
    }

    /// Translate `"path"` or `"path?key=value"`.
    ///
    /// The first matching handler wins. Unmatched paths come back verbatim
    /// so a missing string is visible instead of blank.
    pub fn get(&self, url: &str) -> String {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let params = QueryParams::parse(query);
        let locale = self.locale();

        match self.handlers.match_topic(path).first() {
            Some(handler) => handler.translate(path, &params, &locale),
            None => path.to_string(),
        }
    }

    pub fn set_locale(&self, locale: &str) {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale.to_string();
    }

    pub fn locale(&self) -> String {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
