//! Accessibility permission check and remediation.

use tracing::{info, warn};

use crate::media::dispatcher::Remediator;
use crate::model::constants::ACCESSIBILITY_SETTINGS_URLS;

/// Access to the Accessibility (TCC) trust state.
pub trait AccessibilityProbe {
    fn is_trusted(&self) -> bool;
    /// Ask the system to show its prompt; returns the trust state afterwards.
    fn request(&self) -> bool;
}

/// Make sure the event tap can be created, prompting and then opening the
/// Accessibility pane if needed. Returns whether the process is trusted.
pub fn ensure_accessibility<P, R>(probe: &P, remediator: &R) -> bool
where
    P: AccessibilityProbe,
    R: Remediator,
{
    if probe.is_trusted() {
        return true;
    }

    info!("requesting Accessibility permission");
    if probe.request() {
        return true;
    }

    warn!("Accessibility permission missing, opening System Settings");
    for url in ACCESSIBILITY_SETTINGS_URLS {
        remediator.open_url(url);
    }
    false
}
