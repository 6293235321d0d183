//! AppleScript sources for each (key, player) pair.
//!
//! Spotify is brought up with `activate` on a cold start and given a second
//! before the command is sent; Music is only ever `launch`ed so normal key
//! handling never steals focus. Fast-forward and rewind have no mapping.
//!
//! Play/pause on a paused Music resumes the current track; only a stopped
//! player restarts the Library playlist.

use crate::media::keys::MediaKey;
use crate::model::TargetApp;

const SPOTIFY_PLAY_PAUSE: &str = r#"
if application "Spotify" is running then
    tell application "Spotify" to playpause
else
    tell application "Spotify"
        activate
        delay 1
        try
            play
        end try
    end tell
end if
"#;

const SPOTIFY_NEXT: &str = r#"
if application "Spotify" is running then
    tell application "Spotify" to next track
else
    tell application "Spotify"
        activate
        delay 1
        next track
    end tell
end if
"#;

const SPOTIFY_PREVIOUS: &str = r#"
if application "Spotify" is running then
    tell application "Spotify" to previous track
else
    tell application "Spotify"
        activate
        delay 1
        previous track
    end tell
end if
"#;

const MUSIC_PLAY_PAUSE: &str = r#"
if application "Music" is running then
    tell application "Music"
        if player state is stopped then
            play playlist "Library"
        else
            playpause
        end if
    end tell
else
    tell application "Music" to launch
    delay 2
    tell application "Music"
        try
            play playlist "Library"
        on error
            delay 0.5
            play playlist "Library"
        end try
    end tell
end if
"#;

const MUSIC_NEXT: &str = r#"
tell application "Music"
    try
        next track
        if player state is stopped then play
    on error
        play playlist "Library"
    end try
end tell
"#;

const MUSIC_PREVIOUS: &str = r#"
tell application "Music"
    try
        previous track
        if player state is stopped then play
    on error
        play playlist "Library"
    end try
end tell
"#;

/// Script to run for `key` against `app`, or `None` when the key is not
/// handled and should reach the rest of the system.
pub fn control_script(key: MediaKey, app: TargetApp) -> Option<&'static str> {
    match (key, app) {
        (MediaKey::PlayPause, TargetApp::Spotify) => Some(SPOTIFY_PLAY_PAUSE),
        (MediaKey::Next, TargetApp::Spotify) => Some(SPOTIFY_NEXT),
        (MediaKey::Previous, TargetApp::Spotify) => Some(SPOTIFY_PREVIOUS),
        (MediaKey::PlayPause, TargetApp::AppleMusic) => Some(MUSIC_PLAY_PAUSE),
        (MediaKey::Next, TargetApp::AppleMusic) => Some(MUSIC_NEXT),
        (MediaKey::Previous, TargetApp::AppleMusic) => Some(MUSIC_PREVIOUS),
        (MediaKey::FastForward | MediaKey::Rewind, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [MediaKey; 5] = [
        MediaKey::PlayPause,
        MediaKey::Next,
        MediaKey::Previous,
        MediaKey::FastForward,
        MediaKey::Rewind,
    ];

    #[test]
    fn only_transport_keys_are_mapped() {
        for app in TargetApp::ALL {
            for key in ALL_KEYS {
                let mapped = control_script(key, app).is_some();
                let expected = matches!(
                    key,
                    MediaKey::PlayPause | MediaKey::Next | MediaKey::Previous
                );
                assert_eq!(mapped, expected, "{key:?} for {app}");
            }
        }
    }

    #[test]
    fn scripts_address_their_own_player() {
        for app in TargetApp::ALL {
            let tell = format!("tell application \"{}\"", app.scripting_name());
            for key in [MediaKey::PlayPause, MediaKey::Next, MediaKey::Previous] {
                let script = control_script(key, app).unwrap();
                assert!(script.contains(&tell), "{key:?} for {app}");
            }
        }
    }

    #[test]
    fn music_is_never_activated() {
        for key in ALL_KEYS {
            if let Some(script) = control_script(key, TargetApp::AppleMusic) {
                assert!(!script.contains("activate"));
            }
        }
    }

    #[test]
    fn spotify_cold_start_waits_before_acting() {
        for (key, command) in [
            (MediaKey::PlayPause, "play"),
            (MediaKey::Next, "next track"),
            (MediaKey::Previous, "previous track"),
        ] {
            let script = control_script(key, TargetApp::Spotify).unwrap();
            assert!(script.contains("if application \"Spotify\" is running"), "{key:?}");
            let cold = &script[script.find("else").expect("cold-start branch")..];
            let activate = cold.find("activate").expect("activate on cold start");
            let delay = cold.find("delay 1").expect("delay on cold start");
            let act = cold.rfind(command).expect("command on cold start");
            assert!(activate < delay && delay < act, "{key:?}");
        }
    }

    #[test]
    fn paused_music_resumes_instead_of_restarting() {
        let script = control_script(MediaKey::PlayPause, TargetApp::AppleMusic).unwrap();
        assert!(script.contains("if player state is stopped then"));
        assert!(!script.contains("paused"));
        assert!(script.contains("playpause"));
    }
}
