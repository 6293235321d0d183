//! Event dispatcher for menu actions.
//!
//! Menu actions publish an [`AppEvent`] and then call [`dispatch_events`],
//! which drains the bus and runs the matching action against the
//! [`ButlerApp`] owned by the status bar controller.
//!
//! ```text
//! menu item → publish(AppEvent) → dispatch_events() → ButlerApp / UI
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::events::{take_event, AppEvent};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp};
use crate::platform::macos::ui::{butler_app, refresh_status_bar, show_fireworks};

/// Held while events are being handled.
///
/// Permission prompts and `terminate:` can spin the run loop, which may
/// deliver another menu action before the first one returns.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Dispatch all pending events from the global event bus.
///
/// # Safety
/// Must be called from the main thread with the status bar controller.
pub unsafe fn dispatch_events(controller: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        // The outer call picks the new event up.
        return;
    }

    while let Some(event) = take_event() {
        debug!(event = event.description(), "dispatching");
        dispatch_single_event(controller, &event);
        if event.requires_menu_refresh() {
            refresh_status_bar(controller);
        }
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

unsafe fn dispatch_single_event(controller: id, event: &AppEvent) {
    match event {
        AppEvent::SelectPlayer(app) => {
            if let Some(butler) = butler_app(controller) {
                butler.toggle_player(*app);
            }
        }

        AppEvent::ToggleLaunchAtLogin => {
            if let Some(butler) = butler_app(controller) {
                butler.toggle_launch_at_login();
            }
        }

        AppEvent::ShowFireworks => show_fireworks(controller),

        AppEvent::CheckForUpdates => {
            if let Some(butler) = butler_app(controller) {
                butler.open_updates_page();
            }
        }

        AppEvent::Quit => {
            info!("quit requested");
            if let Some(butler) = butler_app(controller) {
                butler.shutdown();
            }
            let _: () = msg_send![NSApp(), terminate: nil];
        }
    }
}
