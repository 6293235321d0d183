//! FFI bindings for ApplicationServices (Accessibility).
//!
//! Creating an event tap that can consume events requires the process to be
//! trusted for Accessibility. These bindings check that trust and trigger
//! the system prompt.

use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::string::{CFString, CFStringRef};

use crate::media::AccessibilityProbe;

// === FFI Declarations ===

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    pub fn AXIsProcessTrusted() -> bool;

    pub fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> bool;

    pub static kAXTrustedCheckOptionPrompt: CFStringRef;
}

/// Ask for accessibility permission, showing the system prompt if the
/// process is not trusted yet. Returns the current trust state.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn ensure_accessibility_prompt() -> bool {
    let key = CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt);
    let options = CFDictionary::from_CFType_pairs(&[(key, CFBoolean::true_value())]);
    AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef())
}

/// [`AccessibilityProbe`] backed by the TCC Accessibility API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAccessibility;

impl AccessibilityProbe for SystemAccessibility {
    fn is_trusted(&self) -> bool {
        unsafe { AXIsProcessTrusted() }
    }

    fn request(&self) -> bool {
        unsafe { ensure_accessibility_prompt() }
    }
}
