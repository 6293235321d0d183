//! Configuration constants and default values.
//!
//! This module contains all application constants including NSUserDefaults
//! keys, bundle identifiers, System Settings deep links and fireworks tuning.

// === NSUserDefaults Keys ===

/// Key for the selected player (stored as its display name).
pub const PREF_SELECTED_PLAYER: &str = "selectedMusicPlayer";

/// Key for the launch-at-login flag.
pub const PREF_LAUNCH_AT_LOGIN: &str = "launchAtLogin";

/// Launch at login is on until the user turns it off.
pub const DEFAULT_LAUNCH_AT_LOGIN: bool = true;

// === Target Applications ===

pub const SPOTIFY_BUNDLE_ID: &str = "com.spotify.client";
pub const APPLE_MUSIC_BUNDLE_ID: &str = "com.apple.Music";

// === System Settings Deep Links ===

/// Accessibility pane, newest URL scheme first; opened in order.
pub const ACCESSIBILITY_SETTINGS_URLS: [&str; 2] = [
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility",
    "x-apple.systempreferences:Security_Privacy?Privacy_Accessibility",
];

/// Automation pane (Apple Events permission per target app).
pub const AUTOMATION_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Automation";

/// Project page opened by "Check for Updates...".
pub const UPDATES_URL: &str = "https://github.com/kalvinwolf/Media-Butler";

// === AppleScript Error Numbers ===

/// errAEEventNotPermitted: Automation access not granted.
pub const SCRIPT_ERR_NOT_AUTHORIZED: i64 = -1743;

/// errAENoSuchObject: the addressed application is not running.
pub const SCRIPT_ERR_NOT_RUNNING: i64 = -1728;

// === Status Item ===

pub const SYMBOL_SPOTIFY: &str = "music.note.list";
pub const SYMBOL_APPLE_MUSIC: &str = "music.note";
pub const SYMBOL_IDLE: &str = "music.note";

// === Fireworks ===

/// Particles spawned by a single burst.
pub const FIREWORK_PARTICLES_PER_BURST: usize = 150;

/// Horizontal launch positions as fractions of the overlay width.
pub const FIREWORK_LAUNCH_FRACTIONS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Delay between consecutive bursts, in seconds.
pub const FIREWORK_LAUNCH_STAGGER: f64 = 0.1;

/// Particle speed range (points per frame).
pub const FIREWORK_MIN_SPEED: f64 = 10.0;
pub const FIREWORK_MAX_SPEED: f64 = 25.0;

/// Vertical velocity multiplier applied at spawn.
pub const FIREWORK_VERTICAL_BOOST: f64 = 1.5;

/// Particle diameter range in points.
pub const FIREWORK_MIN_SIZE: f64 = 4.0;
pub const FIREWORK_MAX_SIZE: f64 = 12.0;

/// Per-frame change to vertical velocity.
pub const FIREWORK_GRAVITY: f64 = 0.08;

/// Per-frame opacity loss.
pub const FIREWORK_FADE: f64 = 0.008;

/// The overlay hides itself after this many seconds.
pub const FIREWORK_DURATION: f64 = 2.0;

/// Animation tick (60 Hz).
pub const FIREWORK_FRAME_INTERVAL: f64 = 1.0 / 60.0;

/// Palette shared by all bursts (r, g, b).
pub const FIREWORK_PALETTE: [(f64, f64, f64); 12] = [
    (1.0, 0.23, 0.19),  // red
    (1.0, 0.58, 0.0),   // orange
    (1.0, 0.8, 0.0),    // yellow
    (1.0, 0.18, 0.33),  // pink
    (0.69, 0.32, 0.87), // purple
    (0.0, 0.48, 1.0),   // blue
    (0.0, 0.78, 0.75),  // mint
    (0.2, 0.68, 0.9),   // cyan
    (0.19, 0.69, 0.78), // teal
    (0.2, 0.78, 0.35),  // green
    (1.0, 0.8, 0.2),    // gold
    (1.0, 0.4, 0.7),    // hot pink
];
