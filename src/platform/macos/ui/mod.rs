//! AppKit user interface: the status bar controller, its menu and the
//! fireworks overlay.

mod controller;
mod fireworks;
mod status_bar;

pub use controller::{butler_app, register_and_create_controller};
pub use fireworks::show_fireworks;
pub use status_bar::{install_status_bar, refresh_status_bar};
