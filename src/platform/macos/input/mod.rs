//! Input handling module.
//!
//! - event_tap.rs: CoreGraphics event tap delivering media keys
//! - observers.rs: System observers (termination)

pub mod event_tap;
pub mod observers;

pub use event_tap::CgEventTap;
pub use observers::install_termination_observer;
