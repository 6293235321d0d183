//! Application settings (pure Rust, no FFI).
//!
//! This module defines the persisted settings and how they map onto a
//! [`Preferences`] store.

use tracing::warn;

use super::constants::*;
use super::preferences::Preferences;
use super::target::TargetApp;

/// Settings persisted across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    /// Player that receives media keys, if any.
    pub selected_player: Option<TargetApp>,
    /// Register as a login item.
    pub launch_at_login: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            selected_player: None,
            launch_at_login: DEFAULT_LAUNCH_AT_LOGIN,
        }
    }
}

impl AppSettings {
    /// Read settings from the store. A stored name that no longer matches a
    /// supported player yields no selection.
    pub fn load(prefs: &impl Preferences) -> Self {
        let selected_player = prefs
            .get_string(PREF_SELECTED_PLAYER)
            .and_then(|name| match TargetApp::from_display_name(&name) {
                Ok(app) => Some(app),
                Err(err) => {
                    warn!(%err, "ignoring stored player selection");
                    None
                }
            });

        Self {
            selected_player,
            launch_at_login: prefs
                .get_bool(PREF_LAUNCH_AT_LOGIN)
                .unwrap_or(DEFAULT_LAUNCH_AT_LOGIN),
        }
    }

    pub fn save(&self, prefs: &mut impl Preferences) {
        self.save_selection(prefs);
        prefs.set_bool(PREF_LAUNCH_AT_LOGIN, self.launch_at_login);
    }

    /// Write only the player selection (removed when nothing is selected).
    pub fn save_selection(&self, prefs: &mut impl Preferences) {
        match self.selected_player {
            Some(app) => prefs.set_string(PREF_SELECTED_PLAYER, app.display_name()),
            None => prefs.remove(PREF_SELECTED_PLAYER),
        }
    }

    /// Menu semantics: picking the checked player clears the selection,
    /// picking the other one switches to it. Returns the new selection.
    pub fn toggle_player(&mut self, app: TargetApp) -> Option<TargetApp> {
        self.selected_player = if self.selected_player == Some(app) {
            None
        } else {
            Some(app)
        };
        self.selected_player
    }

    pub fn is_selected(&self, app: TargetApp) -> bool {
        self.selected_player == Some(app)
    }
}
