//! Full-screen, click-through fireworks overlay.
//!
//! One borderless window spans the union of all screens. It is created on
//! first use, kept on the controller, and reused by later shows.

mod drawing;
mod view;

use tracing::info;

use crate::model::FireworksShow;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, NSPoint, NSRect, NSSize, ObjectExt, NO, YES,
};

use view::{register_and_create_view, start_show};

// NSFloatingWindowLevel
const OVERLAY_WINDOW_LEVEL: isize = 3;

/// Frame covering every attached screen, in global Cocoa coordinates.
unsafe fn screens_union() -> NSRect {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    let count: usize = msg_send![screens, count];

    let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
    let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
    for i in 0..count {
        let screen: id = msg_send![screens, objectAtIndex: i];
        let frame: NSRect = msg_send![screen, frame];
        min_x = min_x.min(frame.origin.x);
        min_y = min_y.min(frame.origin.y);
        max_x = max_x.max(frame.origin.x + frame.size.width);
        max_y = max_y.max(frame.origin.y + frame.size.height);
    }

    if count == 0 {
        let main: id = msg_send![get_class("NSScreen"), mainScreen];
        if main == nil {
            return NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(0.0, 0.0));
        }
        return msg_send![main, frame];
    }
    NSRect::new(
        NSPoint::new(min_x, min_y),
        NSSize::new(max_x - min_x, max_y - min_y),
    )
}

unsafe fn make_overlay_window(frame: NSRect) -> id {
    // NSBorderlessWindowMask = 0, NSBackingStoreBuffered = 2
    let style_mask: u64 = 0;
    let backing: u64 = 2;

    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: style_mask,
        backing: backing,
        defer: NO
    ];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];
    let _: () = msg_send![window, setOpaque: NO];
    let clear_color: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![window, setBackgroundColor: clear_color];
    let _: () = msg_send![window, setHasShadow: NO];
    let _: () = msg_send![window, setIgnoresMouseEvents: YES];
    let _: () = msg_send![window, setLevel: OVERLAY_WINDOW_LEVEL];

    // CanJoinAllSpaces | Stationary | FullScreenAuxiliary
    let collection_behavior: u64 = 1 | 16 | 256;
    let _: () = msg_send![window, setCollectionBehavior: collection_behavior];
    window
}

/// Start a fireworks show over all screens.
///
/// # Safety
/// Must be called from the main thread with the status bar controller.
pub unsafe fn show_fireworks(controller: id) {
    let frame = screens_union();
    if frame.size.width <= 0.0 || frame.size.height <= 0.0 {
        return;
    }

    let mut window: id = *(*controller).load_ivar::<id>("_fireworksWindow");
    let mut view: id = *(*controller).load_ivar::<id>("_fireworksView");
    if window == nil {
        window = make_overlay_window(frame);
        view = register_and_create_view(window, frame.size.width, frame.size.height);
        (*controller).store_ivar::<id>("_fireworksWindow", window);
        (*controller).store_ivar::<id>("_fireworksView", view);
    } else {
        // Screens may have changed since the last show.
        let _: () = msg_send![window, setFrame: frame, display: NO];
        let local = NSRect::new(NSPoint::new(0.0, 0.0), frame.size);
        let _: () = msg_send![view, setFrame: local];
    }

    start_show(view, FireworksShow::new(frame.size.width, frame.size.height));
    let _: () = msg_send![window, orderFrontRegardless];
    info!(
        width = frame.size.width,
        height = frame.size.height,
        "fireworks started"
    );
}
