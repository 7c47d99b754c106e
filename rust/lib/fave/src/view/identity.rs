//! Identity screen projection.

use fave_flux::I18nStore;

use crate::state::IdentityState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityScreen {
    pub title: String,
    pub username_label: String,
    pub input: String,
    /// Shows the busy variant while the handshake is pending.
    pub button_label: String,
    pub button_enabled: bool,
    /// One human-readable line under the input.
    pub error: Option<String>,
}

pub fn project_identity(state: &IdentityState, i18n: &I18nStore) -> IdentityScreen {
    let busy = state.phase.is_pending();
    IdentityScreen {
        title: i18n.get("ui/identity/title"),
        username_label: i18n.get("ui/identity/username"),
        input: state.input.clone(),
        button_label: i18n.get(if busy { "ui/identity/busy" } else { "ui/identity/submit" }),
        button_enabled: !busy,
        error: state.phase.error().map(str::to_string),
    }
}
