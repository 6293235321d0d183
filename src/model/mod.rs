//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the target identity, persisted settings, the fireworks
//! simulation and configuration constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod app_state;
pub mod constants;
pub mod fireworks;
pub mod preferences;
pub mod target;

pub use app_state::AppSettings;
pub use constants::*;
pub use fireworks::{FireworksShow, Particle};
pub use preferences::{MemoryPreferences, Preferences};
pub use target::TargetApp;
