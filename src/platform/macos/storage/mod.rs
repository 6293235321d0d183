//! Storage for macOS.
//!
//! Persists settings to NSUserDefaults and manages the login item.

pub mod login_item;
pub mod preferences;

pub use login_item::{launch_at_login_status, set_launch_at_login};
pub use preferences::*;
