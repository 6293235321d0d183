//! System observers.
//!
//! The termination observer tears the event tap down however the app
//! exits (Quit item, logout, `killall`-style terminate requests).

use tracing::info;

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, RcBlock};
use crate::platform::macos::ui::butler_app;

/// Install an observer that shuts the app instance down when the app terminates.
///
/// # Safety
/// - `controller` must be the status bar controller created by
///   `register_and_create_controller` and must live until exit.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(controller: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let queue: id = nil; // posting thread (main)

    let block = RcBlock::new(move |_note: id| {
        info!("application terminating");
        if let Some(app) = unsafe { butler_app(controller) } {
            app.shutdown();
        }
    });

    let name = nsstring("NSApplicationWillTerminateNotification");
    let _: id = msg_send![
        center,
        addObserverForName: &*name,
        object: nil,
        queue: queue,
        usingBlock: &*block
    ];
}
