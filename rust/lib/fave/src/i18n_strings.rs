//! FAVE UI text: Japanese (default) and English.
//!
//! Static strings are a path → `[ja, en]` table. Strings with arguments
//! take them from the query: `ui/reaction/like?count=3`,
//! `error/identity/rejected?status=Bad%20Request`.

use std::collections::HashMap;
use std::sync::Arc;

use fave_flux::{I18nHandler, I18nStore, QueryParams};

use crate::model::ReactionKind;

/// Register all FAVE translations.
pub fn register_all(i18n: &I18nStore) {
    i18n.handle("ui/reaction/+", Arc::new(ReactionStrings));
    i18n.handle("#", Arc::new(Strings::new()));
}

const JA: usize = 0;
const EN: usize = 1;

fn locale_index(locale: &str) -> usize {
    match locale {
        "en" | "en-US" | "en-GB" => EN,
        _ => JA,
    }
}

/// URL of a reaction button label showing `count`.
pub fn reaction_label_url(kind: ReactionKind, count: u64) -> String {
    format!("ui/reaction/{}?count={}", kind.as_str(), count)
}

// ── Static and templated strings ──

struct Strings {
    data: HashMap<&'static str, [&'static str; 2]>,
}

impl Strings {
    fn new() -> Self {
        let mut m = HashMap::new();

        // Identity screen
        m.insert("ui/identity/title", ["推しを推し合う。", "Cheer each other's faves."]);
        m.insert("ui/identity/username", ["ユーザー名", "Username"]);
        m.insert("ui/identity/submit", ["ログイン または サインアップ", "Log in or sign up"]);
        m.insert("ui/identity/busy", ["読み込み中...", "Loading..."]);

        // Timeline
        m.insert("ui/post/fave_suffix", ["推し", "fave"]);
        m.insert("ui/post/delete", ["削除", "Delete"]);
        m.insert("ui/timeline/loading", ["読み込み中...", "Loading..."]);
        m.insert("ui/timeline/empty", ["まだ投稿がありません", "No posts yet"]);

        // Notices
        m.insert("notice/identity_created", ["ユーザーを新規作成しました。", "New user created."]);

        // Errors
        m.insert("error/identity/empty", ["ユーザー名を入力してください。", "Please enter a username."]);
        m.insert(
            "error/identity/failed",
            ["ログインに失敗しました。ユーザー名を確認してください。", "Login failed. Please check your username."],
        );
        m.insert("error/identity/rejected", ["ユーザー名が無効です。{status}", "Invalid username. {status}"]);
        m.insert("error/identity/busy", ["処理中です。しばらくお待ちください。", "Still working, please wait."]);
        m.insert("error/timeline/load_failed", ["タイムラインの読み込みに失敗しました。", "Failed to load the timeline."]);
        m.insert("error/timeline/duplicate", ["投稿IDが重複しています: {id}", "Duplicate post id: {id}"]);

        Self { data: m }
    }
}

impl I18nHandler for Strings {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        let Some(texts) = self.data.get(path) else {
            return path.to_string();
        };
        let mut text = texts[locale_index(locale)].to_string();
        for key in ["status", "id"] {
            let placeholder = format!("{{{}}}", key);
            if text.contains(&placeholder) {
                text = text.replace(&placeholder, query.get(key).unwrap_or_default());
            }
        }
        text
    }
}

// ── Reaction buttons ──

/// `ui/reaction/{kind}?count=N` → `"👍 いいね: N"`.
struct ReactionStrings;

impl ReactionStrings {
    fn label(kind: &str, idx: usize) -> Option<&'static str> {
        let texts = match kind {
            "like" => ["いいね", "Like"],
            "watch" => ["見たよ", "Watched"],
            "love" => ["好き", "Love"],
            "new_listener" => ["リスナーになったよ！", "New listener!"],
            _ => return None,
        };
        Some(texts[idx])
    }
}

impl I18nHandler for ReactionStrings {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        let kind = path.rsplit('/').next().unwrap_or_default();
        let kind_icon = ReactionKind::ALL
            .iter()
            .find(|k| k.as_str() == kind)
            .map(|k| k.icon());
        match (kind_icon, Self::label(kind, locale_index(locale))) {
            (Some(icon), Some(label)) => {
                format!("{} {}: {}", icon, label, query.get("count").unwrap_or("0"))
            }
            _ => path.to_string(),
        }
    }
}
