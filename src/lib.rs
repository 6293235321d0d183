#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Media Butler: route the hardware media keys to Spotify or Apple Music.
//!
//! The interception pipeline (`media`), the settings model (`model`) and
//! the menu event bus (`events`) are free of macOS FFI so the test suite
//! runs anywhere. The AppKit, CoreGraphics and ServiceManagement glue is
//! in `platform::macos`.

pub mod error;
pub mod events;
pub mod media;
pub mod model;
pub mod platform;

pub use error::{ButlerError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use media::{Disposition, EventTapController, HookState, MediaKey, TargetSelector};
pub use model::{AppSettings, TargetApp};
