//! macOS entry point: builds the app instance, installs the status bar
//! and runs the AppKit loop.

use media_butler::platform::macos::app::{another_instance_running, ButlerApp};
use media_butler::platform::macos::ffi::bridge::{autoreleasepool, msg_send, NSApp};
use media_butler::platform::macos::input::install_termination_observer;
use media_butler::platform::macos::ui::{install_status_bar, register_and_create_controller};
use tracing::info;

/// Main entry point for macOS.
pub fn run() {
    // Event bus is already initialized by main()

    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        if another_instance_running() {
            info!("Media Butler is already running, exiting");
            return;
        }

        let mut butler = Box::new(ButlerApp::new());
        butler.start();

        let controller = register_and_create_controller(butler);
        install_status_bar(controller);
        install_termination_observer(controller);

        let _: () = msg_send![app, run];
    });
}
