//! Application events for inter-module communication.
//!
//! These events represent menu actions published by the status bar target
//! and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::TargetApp;

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (status bar menu, observers) through the
/// EventBus to the dispatcher, which executes the appropriate actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Menu Events ===
    /// Player picked in "Select Music Player" (picking the checked one clears it)
    SelectPlayer(TargetApp),

    /// "Launch at Login" clicked
    ToggleLaunchAtLogin,

    /// "Firework Mode" clicked
    ShowFireworks,

    /// "Check for Updates..." clicked
    CheckForUpdates,

    /// "Quit" clicked (Cmd+Q)
    Quit,
}

impl AppEvent {
    /// Returns true if the menu checkmarks or status icon must be redrawn
    /// after this event is handled.
    pub fn requires_menu_refresh(&self) -> bool {
        matches!(
            self,
            AppEvent::SelectPlayer(_) | AppEvent::ToggleLaunchAtLogin
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::SelectPlayer(TargetApp::Spotify) => "Select Spotify",
            AppEvent::SelectPlayer(TargetApp::AppleMusic) => "Select Apple Music",
            AppEvent::ToggleLaunchAtLogin => "Toggle launch at login",
            AppEvent::ShowFireworks => "Show fireworks",
            AppEvent::CheckForUpdates => "Open project page",
            AppEvent::Quit => "Quit application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_refresh_required_for_settings_events() {
        assert!(AppEvent::SelectPlayer(TargetApp::Spotify).requires_menu_refresh());
        assert!(AppEvent::SelectPlayer(TargetApp::AppleMusic).requires_menu_refresh());
        assert!(AppEvent::ToggleLaunchAtLogin.requires_menu_refresh());
    }

    #[test]
    fn test_menu_refresh_not_required_for_action_events() {
        assert!(!AppEvent::ShowFireworks.requires_menu_refresh());
        assert!(!AppEvent::CheckForUpdates.requires_menu_refresh());
        assert!(!AppEvent::Quit.requires_menu_refresh());
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(
            AppEvent::SelectPlayer(TargetApp::Spotify),
            AppEvent::SelectPlayer(TargetApp::Spotify)
        );
        assert_ne!(
            AppEvent::SelectPlayer(TargetApp::Spotify),
            AppEvent::SelectPlayer(TargetApp::AppleMusic)
        );
    }

    #[test]
    fn test_event_debug() {
        let event = AppEvent::SelectPlayer(TargetApp::AppleMusic);
        assert_eq!(format!("{:?}", event), "SelectPlayer(AppleMusic)");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::SelectPlayer(TargetApp::Spotify),
            AppEvent::SelectPlayer(TargetApp::AppleMusic),
            AppEvent::ToggleLaunchAtLogin,
            AppEvent::ShowFireworks,
            AppEvent::CheckForUpdates,
            AppEvent::Quit,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
