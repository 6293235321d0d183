//! `Remediator` backed by `NSWorkspace`.
//!
//! Opening a settings pane and launching a player are both handed to
//! LaunchServices and return immediately.

use tracing::{debug, warn};

use crate::media::Remediator;
use crate::model::TargetApp;
use crate::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, nsstring, nsstring_to_string, RcBlock, NO,
    YES,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceRemediator;

impl WorkspaceRemediator {
    pub fn new() -> Self {
        Self
    }
}

unsafe fn shared_workspace() -> id {
    msg_send![get_class("NSWorkspace"), sharedWorkspace]
}

impl Remediator for WorkspaceRemediator {
    fn open_url(&self, url: &str) {
        autoreleasepool(|| unsafe {
            let nsurl: id = msg_send![get_class("NSURL"), URLWithString: &*nsstring(url)];
            if nsurl == nil {
                warn!(url, "not a valid URL");
                return;
            }
            let opened: bool = msg_send![shared_workspace(), openURL: nsurl];
            if !opened {
                warn!(url, "failed to open URL");
            }
        })
    }

    fn launch_app(&self, app: TargetApp, activate: bool) {
        autoreleasepool(|| unsafe {
            let ws = shared_workspace();
            let app_url: id = msg_send![
                ws,
                URLForApplicationWithBundleIdentifier: &*nsstring(app.bundle_id())
            ];
            if app_url == nil {
                warn!(%app, "application is not installed");
                return;
            }

            let config: id = msg_send![get_class("NSWorkspaceOpenConfiguration"), configuration];
            let _: () = msg_send![config, setActivates: if activate { YES } else { NO }];

            // Runs on a background queue once LaunchServices is done.
            let on_launched = RcBlock::new(move |_running: id, error: id| {
                if error.is_null() {
                    debug!(%app, "application launched");
                } else {
                    let description: id = unsafe { msg_send![error, localizedDescription] };
                    let description = unsafe { nsstring_to_string(description) };
                    warn!(%app, error = description.as_deref().unwrap_or("unknown"), "failed to launch application");
                }
            });

            let _: () = msg_send![
                ws,
                openApplicationAtURL: app_url,
                configuration: config,
                completionHandler: &*on_launched
            ];
        })
    }
}
