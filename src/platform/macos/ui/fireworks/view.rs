//! `FireworksView`: an NSView subclass that owns a running show and
//! advances it from a 60 Hz timer.

use std::ffi::c_void;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;
use tracing::debug;

use crate::model::{FireworksShow, FIREWORK_FRAME_INTERVAL};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, NSPoint, NSRect, NSSize, ObjectExt, YES,
};

use super::drawing::{clear, draw_particles};

const CLASS_NAME: &std::ffi::CStr = c"FireworksView";

/// Register the view class and create an instance filling `window`.
///
/// # Safety
/// Must be called from the main thread. `window` must be a valid NSWindow.
pub unsafe fn register_and_create_view(window: id, width: f64, height: f64) -> id {
    let cls = match AnyClass::get(CLASS_NAME) {
        Some(cls) => cls,
        None => {
            let superclass = AnyClass::get(c"NSView").expect("NSView is always registered");
            let mut builder =
                ClassBuilder::new(CLASS_NAME, superclass).expect("view class name is unique");
            builder.add_ivar::<*mut c_void>(c"_show");
            builder.add_ivar::<id>(c"_updateTimer");
            builder.add_method(
                sel!(drawRect:),
                draw_rect as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.add_method(sel!(tick:), tick as unsafe extern "C-unwind" fn(_, _, _));
            builder.add_method(
                sel!(isOpaque),
                is_opaque as unsafe extern "C-unwind" fn(_, _) -> _,
            );
            builder.register()
        }
    };

    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));
    let view: id = msg_send![view, initWithFrame: frame];
    (*view).store_ivar::<*mut c_void>("_show", std::ptr::null_mut());
    (*view).store_ivar::<id>("_updateTimer", nil);

    let _: () = msg_send![window, setContentView: view];
    view
}

/// Replace whatever the view is showing with a fresh show and start ticking.
///
/// # Safety
/// `view` must come from [`register_and_create_view`].
pub unsafe fn start_show(view: id, show: FireworksShow) {
    drop_show(view);
    let boxed = Box::into_raw(Box::new(show));
    (*view).store_ivar::<*mut c_void>("_show", boxed as *mut c_void);
    create_timer(view, sel!(tick:), FIREWORK_FRAME_INTERVAL);
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

/// Stop the timer and free the current show, if any.
unsafe fn stop_show(view: id) {
    let timer: id = *(*view).load_ivar::<id>("_updateTimer");
    if timer != nil {
        let _: () = msg_send![timer, invalidate];
        (*view).store_ivar::<id>("_updateTimer", nil);
    }
    drop_show(view);
}

unsafe fn drop_show(view: id) {
    let ptr = *(*view).load_ivar::<*mut c_void>("_show") as *mut FireworksShow;
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
        (*view).store_ivar::<*mut c_void>("_show", std::ptr::null_mut());
    }
}

unsafe fn show_mut<'a>(view: &AnyObject) -> Option<&'a mut FireworksShow> {
    let ptr = *view.load_ivar::<*mut c_void>("_show") as *mut FireworksShow;
    ptr.as_mut()
}

/// Repeating timer on the current run loop in common modes, so the show
/// keeps animating while the status menu is open.
unsafe fn create_timer(target: id, selector: Sel, interval: f64) -> id {
    let prev: id = *(*target).load_ivar::<id>("_updateTimer");
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
        (*target).store_ivar::<id>("_updateTimer", nil);
    }
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: selector,
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let _: () = msg_send![run_loop, addTimer: timer, forMode: &*nsstring("kCFRunLoopCommonModes")];

    (*target).store_ivar::<id>("_updateTimer", timer);
    timer
}

unsafe extern "C-unwind" fn tick(this: &mut AnyObject, _cmd: Sel, _timer: id) {
    let view = this as *mut AnyObject;
    let finished = match show_mut(this) {
        Some(show) => {
            show.step(FIREWORK_FRAME_INTERVAL);
            show.is_finished()
        }
        None => true,
    };

    if finished {
        stop_show(view);
        let window: id = msg_send![view, window];
        if window != nil {
            let _: () = msg_send![window, orderOut: nil];
        }
        debug!("fireworks finished");
        return;
    }
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _rect: NSRect) {
    let bounds: NSRect = msg_send![this, bounds];
    clear(bounds);
    if let Some(show) = show_mut(this) {
        draw_particles(show.particles());
    }
}

unsafe extern "C-unwind" fn is_opaque(_this: &AnyObject, _cmd: Sel) -> objc2::runtime::Bool {
    objc2::runtime::Bool::NO
}
