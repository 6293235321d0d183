//! Target application identity.
//!
//! The running system only ever holds a `TargetApp` (or `None`); bundle
//! identifiers and display names are confined to the OS and persistence
//! boundaries.

use std::fmt;

use super::constants::*;
use crate::error::ButlerError;

/// One of the two players media keys can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetApp {
    Spotify,
    AppleMusic,
}

impl TargetApp {
    /// Menu order.
    pub const ALL: [TargetApp; 2] = [TargetApp::Spotify, TargetApp::AppleMusic];

    pub fn bundle_id(self) -> &'static str {
        match self {
            TargetApp::Spotify => SPOTIFY_BUNDLE_ID,
            TargetApp::AppleMusic => APPLE_MUSIC_BUNDLE_ID,
        }
    }

    /// Name shown in the menu and stored in preferences.
    pub fn display_name(self) -> &'static str {
        match self {
            TargetApp::Spotify => "Spotify",
            TargetApp::AppleMusic => "Apple Music",
        }
    }

    /// Name used in `tell application "..."` blocks.
    pub fn scripting_name(self) -> &'static str {
        match self {
            TargetApp::Spotify => "Spotify",
            TargetApp::AppleMusic => "Music",
        }
    }

    /// SF Symbol shown in the status item while this app is selected.
    pub fn symbol_name(self) -> &'static str {
        match self {
            TargetApp::Spotify => SYMBOL_SPOTIFY,
            TargetApp::AppleMusic => SYMBOL_APPLE_MUSIC,
        }
    }

    pub fn from_bundle_id(bundle_id: &str) -> Result<Self, ButlerError> {
        Self::ALL
            .into_iter()
            .find(|app| app.bundle_id() == bundle_id)
            .ok_or_else(|| ButlerError::UnsupportedTarget(bundle_id.to_string()))
    }

    pub fn from_display_name(name: &str) -> Result<Self, ButlerError> {
        Self::ALL
            .into_iter()
            .find(|app| app.display_name() == name)
            .ok_or_else(|| ButlerError::UnsupportedTarget(name.to_string()))
    }

    /// Menu item tag, also the value stored in the selector cell (0 means none).
    pub fn tag(self) -> u8 {
        match self {
            TargetApp::Spotify => 1,
            TargetApp::AppleMusic => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(TargetApp::Spotify),
            2 => Some(TargetApp::AppleMusic),
            _ => None,
        }
    }
}

impl fmt::Display for TargetApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
