//! Platform-specific implementations.
//!
//! Only macOS is supported. The submodule provides:
//! - FFI bindings (CoreGraphics event taps, Accessibility, ServiceManagement)
//! - The event tap backend, AppleScript engine and workspace remediation
//! - UI components (status bar menu, fireworks overlay)
//! - Storage (NSUserDefaults, login item)

#[cfg(target_os = "macos")]
pub mod macos;
