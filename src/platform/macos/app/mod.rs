//! Application state and process helpers.

pub mod helpers;
pub mod state;

pub use helpers::{another_instance_running, bundle_identifier};
pub use state::ButlerApp;
