//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! - FFI bindings to CoreGraphics, ApplicationServices and the ObjC runtime
//! - Event tap backend and system observers
//! - AppleScript engine and NSWorkspace remediation
//! - Storage (NSUserDefaults, login item)
//! - Status bar menu and fireworks overlay

pub mod app;
pub mod automation;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use ui::*;
