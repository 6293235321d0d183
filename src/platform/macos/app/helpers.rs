//! Process-level helpers.

use tracing::debug;

use crate::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nsstring, nsstring_to_string,
};

/// Bundle identifier of the running app; `None` when launched outside a
/// bundle (e.g. `cargo run`).
pub fn bundle_identifier() -> Option<String> {
    autoreleasepool(|| unsafe {
        let bundle: id = msg_send![get_class("NSBundle"), mainBundle];
        let ident: id = msg_send![bundle, bundleIdentifier];
        nsstring_to_string(ident)
    })
}

/// True if another process with our bundle identifier is already running.
pub fn another_instance_running() -> bool {
    let Some(bundle_id) = bundle_identifier() else {
        debug!("not running from a bundle, skipping single-instance check");
        return false;
    };

    autoreleasepool(|| unsafe {
        let apps: id = msg_send![
            get_class("NSRunningApplication"),
            runningApplicationsWithBundleIdentifier: &*nsstring(&bundle_id)
        ];
        let count: usize = msg_send![apps, count];
        count > 1
    })
}
