//! Decoding of system-defined hardware key events.
//!
//! Media keys arrive as `NSSystemDefined` events (CGEvent type 14) with
//! subtype 8 (`NX_SUBTYPE_AUX_CONTROL_BUTTONS`). The payload lives in
//! `data1`:
//!
//! ```text
//!  31            16 15     8 7      0
//! ┌────────────────┬────────┬────────┐
//! │    key code    │ state  │ flags  │
//! └────────────────┴────────┴────────┘
//! ```
//!
//! state `0x0A` is key-down, `0x0B` key-up. The layout is undocumented and
//! observed empirically; keep it in sync with real hardware, not headers.

/// `NX_SUBTYPE_AUX_CONTROL_BUTTONS`
pub const NX_SUBTYPE_AUX_CONTROL_BUTTONS: i16 = 8;

// NX_KEYTYPE_* from IOKit's ev_keymap.h
pub const NX_KEYTYPE_PLAY: u16 = 16;
pub const NX_KEYTYPE_NEXT: u16 = 17;
pub const NX_KEYTYPE_PREVIOUS: u16 = 18;
pub const NX_KEYTYPE_FAST: u16 = 19;
pub const NX_KEYTYPE_REWIND: u16 = 20;

const KEY_STATE_DOWN: u16 = 0x0A;

/// The five media keys we recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKey {
    PlayPause,
    Next,
    Previous,
    FastForward,
    Rewind,
}

impl MediaKey {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            NX_KEYTYPE_PLAY => Some(MediaKey::PlayPause),
            NX_KEYTYPE_NEXT => Some(MediaKey::Next),
            NX_KEYTYPE_PREVIOUS => Some(MediaKey::Previous),
            NX_KEYTYPE_FAST => Some(MediaKey::FastForward),
            NX_KEYTYPE_REWIND => Some(MediaKey::Rewind),
            _ => None,
        }
    }

    pub fn code(self) -> u16 {
        match self {
            MediaKey::PlayPause => NX_KEYTYPE_PLAY,
            MediaKey::Next => NX_KEYTYPE_NEXT,
            MediaKey::Previous => NX_KEYTYPE_PREVIOUS,
            MediaKey::FastForward => NX_KEYTYPE_FAST,
            MediaKey::Rewind => NX_KEYTYPE_REWIND,
        }
    }
}

/// Result of decoding one `data1` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedKey {
    /// `None` for any code outside the five media keys.
    pub key: Option<MediaKey>,
    pub pressed: bool,
    pub code: u16,
    pub flags: u16,
}

/// Split a `data1` word into key code, flags and press state.
pub fn classify(data1: i64) -> ClassifiedKey {
    let data = data1 as u64;
    let code = ((data & 0xFFFF_0000) >> 16) as u16;
    let flags = (data & 0x0000_FFFF) as u16;
    let pressed = ((flags & 0xFF00) >> 8) == KEY_STATE_DOWN;

    ClassifiedKey {
        key: MediaKey::from_code(code),
        pressed,
        code,
        flags,
    }
}

/// Why the OS switched the tap off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapDisabledReason {
    /// The callback took too long.
    Timeout,
    UserInput,
}

/// Raw event as delivered to the tap, reduced to what the pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// OS self-protection signal; not a key event.
    TapDisabled(TapDisabledReason),
    /// `NSSystemDefined` event.
    SystemDefined { subtype: i16, data1: i64 },
    /// Anything else the mask let through (CGEvent type).
    Other(u32),
}

impl RawEvent {
    /// Build the `data1` word for a media key, as the keyboard would.
    pub fn media_key(key: MediaKey, pressed: bool) -> Self {
        let state: u16 = if pressed { KEY_STATE_DOWN } else { 0x0B };
        let data1 = ((key.code() as i64) << 16) | ((state as i64) << 8);
        RawEvent::SystemDefined {
            subtype: NX_SUBTYPE_AUX_CONTROL_BUTTONS,
            data1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_play_key_down() {
        // 0x0010_0A00: code 16, state 0x0A
        let k = classify(0x0010_0A00);
        assert_eq!(k.key, Some(MediaKey::PlayPause));
        assert!(k.pressed);
        assert_eq!(k.code, 16);
        assert_eq!(k.flags, 0x0A00);
    }

    #[test]
    fn decodes_key_up() {
        let k = classify(0x0011_0B00);
        assert_eq!(k.key, Some(MediaKey::Next));
        assert!(!k.pressed);
    }

    #[test]
    fn repeat_bit_does_not_change_state() {
        let k = classify(0x0012_0A01);
        assert_eq!(k.key, Some(MediaKey::Previous));
        assert!(k.pressed);
    }

    #[test]
    fn volume_keys_are_not_media_keys() {
        // NX_KEYTYPE_SOUND_UP = 0, NX_KEYTYPE_MUTE = 7
        assert_eq!(classify(0x0000_0A00).key, None);
        assert_eq!(classify(0x0007_0A00).key, None);
        assert_eq!(classify(0x0015_0A00).key, None);
    }

    #[test]
    fn upper_half_of_word_is_ignored() {
        let data1 = (0x7fi64 << 32) | 0x0013_0A00;
        assert_eq!(classify(data1).key, Some(MediaKey::FastForward));
    }

    #[test]
    fn codes_round_trip_through_media_key() {
        for code in NX_KEYTYPE_PLAY..=NX_KEYTYPE_REWIND {
            let key = MediaKey::from_code(code).unwrap();
            assert_eq!(key.code(), code);
        }
    }

    #[test]
    fn synthesized_events_classify_back() {
        let RawEvent::SystemDefined { data1, subtype } = RawEvent::media_key(MediaKey::Rewind, true)
        else {
            panic!("expected system-defined event");
        };
        assert_eq!(subtype, NX_SUBTYPE_AUX_CONTROL_BUTTONS);
        let k = classify(data1);
        assert_eq!(k.key, Some(MediaKey::Rewind));
        assert!(k.pressed);
    }
}
