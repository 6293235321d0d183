//! Currently selected target, readable from the tap callback without locks.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::model::TargetApp;

const NONE: u8 = 0;

/// Single-value cell holding `Option<TargetApp>`.
///
/// Written from menu actions, read on every media key. The value is one
/// byte so a read never sees a partially written identity.
#[derive(Debug, Default)]
pub struct TargetSelector {
    current: AtomicU8,
}

impl TargetSelector {
    pub fn new(initial: Option<TargetApp>) -> Self {
        Self {
            current: AtomicU8::new(initial.map_or(NONE, TargetApp::tag)),
        }
    }

    /// Replace the selection; `None` clears it.
    pub fn select(&self, app: Option<TargetApp>) {
        self.current
            .store(app.map_or(NONE, TargetApp::tag), Ordering::Release);
    }

    pub fn clear(&self) {
        self.select(None);
    }

    pub fn current(&self) -> Option<TargetApp> {
        TargetApp::from_tag(self.current.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_by_default() {
        assert_eq!(TargetSelector::default().current(), None);
    }

    #[test]
    fn select_replaces_previous_value() {
        let sel = TargetSelector::new(Some(TargetApp::Spotify));
        sel.select(Some(TargetApp::AppleMusic));
        assert_eq!(sel.current(), Some(TargetApp::AppleMusic));
        sel.clear();
        assert_eq!(sel.current(), None);
    }
}
