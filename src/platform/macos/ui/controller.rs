//! Status bar controller class.
//!
//! An NSObject subclass that owns the [`ButlerApp`] (through a raw pointer
//! ivar), receives menu actions and keeps references to the menu items
//! whose state it updates.

use std::ffi::c_void;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::{publish, AppEvent};
use crate::model::TargetApp;
use crate::platform::macos::app::ButlerApp;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, ObjectExt};
use crate::platform::macos::handlers::dispatch_events;

const CLASS_NAME: &std::ffi::CStr = c"MBStatusController";

// ============================================================================
// Controller registration and creation
// ============================================================================

/// Register the controller class and create the single instance that owns `app`.
///
/// # Safety
/// Must be called once, from the main thread.
pub unsafe fn register_and_create_controller(app: Box<ButlerApp>) -> id {
    let cls = match AnyClass::get(CLASS_NAME) {
        Some(cls) => cls,
        None => {
            let superclass = AnyClass::get(c"NSObject").expect("NSObject is always registered");
            let mut builder =
                ClassBuilder::new(CLASS_NAME, superclass).expect("controller class name is unique");
            register_ivars(&mut builder);
            register_methods(&mut builder);
            builder.register()
        }
    };

    let controller: id = msg_send![cls, new];
    (*controller).store_ivar::<*mut c_void>("_app", Box::into_raw(app) as *mut c_void);
    for name in IVAR_IDS {
        (*controller).store_ivar::<id>(name, nil);
    }
    controller
}

/// Object ivars, all nil until the status bar and fireworks install them.
const IVAR_IDS: [&str; 6] = [
    "_statusItem",
    "_spotifyItem",
    "_musicItem",
    "_loginItem",
    "_fireworksWindow",
    "_fireworksView",
];

unsafe fn register_ivars(builder: &mut ClassBuilder) {
    builder.add_ivar::<*mut c_void>(c"_app");
    builder.add_ivar::<id>(c"_statusItem");
    builder.add_ivar::<id>(c"_spotifyItem");
    builder.add_ivar::<id>(c"_musicItem");
    builder.add_ivar::<id>(c"_loginItem");
    builder.add_ivar::<id>(c"_fireworksWindow");
    builder.add_ivar::<id>(c"_fireworksView");
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    builder.add_method(
        sel!(selectPlayer:),
        select_player as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(toggleLaunchAtLogin:),
        toggle_launch_at_login as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(showFireworks:),
        show_fireworks as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(checkForUpdates:),
        check_for_updates as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(quit:), quit as unsafe extern "C-unwind" fn(_, _, _));
}

/// The app instance owned by `controller`.
///
/// # Safety
/// `controller` must come from [`register_and_create_controller`]; only use
/// the returned reference on the main thread and do not hold it across
/// another call that fetches it.
pub unsafe fn butler_app<'a>(controller: id) -> Option<&'a mut ButlerApp> {
    if controller.is_null() {
        return None;
    }
    let ptr = *(*controller).load_ivar::<*mut c_void>("_app") as *mut ButlerApp;
    ptr.as_mut()
}

// ============================================================================
// Menu actions
// ============================================================================

fn publish_and_dispatch(this: &mut AnyObject, event: AppEvent) {
    publish(event);
    unsafe { dispatch_events(this as *mut AnyObject) };
}

unsafe extern "C-unwind" fn select_player(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let tag: isize = msg_send![sender, tag];
    let app = u8::try_from(tag).ok().and_then(TargetApp::from_tag);
    match app {
        Some(app) => publish_and_dispatch(this, AppEvent::SelectPlayer(app)),
        None => tracing::warn!(tag, "menu item does not name a player"),
    }
}

unsafe extern "C-unwind" fn toggle_launch_at_login(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this, AppEvent::ToggleLaunchAtLogin);
}

unsafe extern "C-unwind" fn show_fireworks(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this, AppEvent::ShowFireworks);
}

unsafe extern "C-unwind" fn check_for_updates(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this, AppEvent::CheckForUpdates);
}

unsafe extern "C-unwind" fn quit(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this, AppEvent::Quit);
}
