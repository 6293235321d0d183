//! FFI bindings for macOS frameworks.
//!
//! This module encapsulates the `extern "C"` declarations and types needed
//! to talk to CoreGraphics, CoreFoundation, ApplicationServices,
//! and the Objective-C runtime.

pub mod accessibility;
pub mod bridge;
pub mod coregraphics;

// Re-exports for convenient access
pub use accessibility::*;
pub use coregraphics::*;
