//! Status bar (menu bar) item with dropdown menu.
//!
//! ```text
//! Select Music Player ▸  Spotify / Apple Music
//! Launch at Login
//! ─────────────
//! Firework Mode
//! Check for Updates...
//! ─────────────
//! Quit                   ⌘Q
//! ```

use crate::model::{TargetApp, SYMBOL_IDLE};
use crate::platform::macos::app::ButlerApp;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, sel, ObjectExt, Sel, YES,
};

// NSControlStateValueOn / Off
const STATE_ON: isize = 1;
const STATE_OFF: isize = 0;

/// Install the status bar item with its menu, targeting `controller`.
///
/// # Safety
/// Must be called from the main thread, after the controller is created.
pub unsafe fn install_status_bar(controller: id) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
    let _: id = msg_send![status_item, retain];
    (*controller).store_ivar::<id>("_statusItem", status_item);

    let menu = create_status_menu(controller);
    let _: () = msg_send![status_item, setMenu: menu];

    refresh_status_bar(controller);
}

unsafe fn menu_item(title: &str, action: Option<Sel>, key: &str, target: id) -> id {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: &*nsstring(title),
        action: action,
        keyEquivalent: &*nsstring(key)
    ];
    let _: () = msg_send![item, setTarget: target];
    item
}

unsafe fn add_separator(menu: id) {
    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];
}

unsafe fn create_status_menu(controller: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    // Player submenu; the tag carries the TargetApp back to selectPlayer:
    let players: id = msg_send![get_class("NSMenu"), alloc];
    let players: id = msg_send![players, initWithTitle: &*nsstring("Select Music Player")];
    for app in TargetApp::ALL {
        let item = menu_item(app.display_name(), Some(sel!(selectPlayer:)), "", controller);
        let _: () = msg_send![item, setTag: app.tag() as isize];
        let _: () = msg_send![players, addItem: item];
        let ivar = match app {
            TargetApp::Spotify => "_spotifyItem",
            TargetApp::AppleMusic => "_musicItem",
        };
        (*controller).store_ivar::<id>(ivar, item);
    }
    let players_item = menu_item("Select Music Player", None, "", nil);
    let _: () = msg_send![players_item, setSubmenu: players];
    let _: () = msg_send![menu, addItem: players_item];

    let login_item = menu_item("Launch at Login", Some(sel!(toggleLaunchAtLogin:)), "", controller);
    let _: () = msg_send![menu, addItem: login_item];
    (*controller).store_ivar::<id>("_loginItem", login_item);

    add_separator(menu);

    let fireworks = menu_item("Firework Mode", Some(sel!(showFireworks:)), "", controller);
    let _: () = msg_send![menu, addItem: fireworks];

    let updates = menu_item("Check for Updates...", Some(sel!(checkForUpdates:)), "", controller);
    let _: () = msg_send![menu, addItem: updates];

    add_separator(menu);

    let quit = menu_item("Quit", Some(sel!(quit:)), "q", controller);
    let _: () = msg_send![menu, addItem: quit];

    menu
}

/// Bring checkmarks and the status icon in line with `app`'s settings.
///
/// # Safety
/// Must be called from the main thread with the controller that owns the menu.
pub unsafe fn refresh_status_bar(controller: id) {
    let Some(app) = super::butler_app(controller) else {
        return;
    };
    apply_settings(controller, app);
}

unsafe fn apply_settings(controller: id, app: &ButlerApp) {
    let settings = app.settings();

    for (target, ivar) in [
        (TargetApp::Spotify, "_spotifyItem"),
        (TargetApp::AppleMusic, "_musicItem"),
    ] {
        let item: id = *(*controller).load_ivar::<id>(ivar);
        if item != nil {
            let state = if settings.is_selected(target) { STATE_ON } else { STATE_OFF };
            let _: () = msg_send![item, setState: state];
        }
    }

    let login_item: id = *(*controller).load_ivar::<id>("_loginItem");
    if login_item != nil {
        let state = if settings.launch_at_login { STATE_ON } else { STATE_OFF };
        let _: () = msg_send![login_item, setState: state];
    }

    let status_item: id = *(*controller).load_ivar::<id>("_statusItem");
    if status_item == nil {
        return;
    }
    let button: id = msg_send![status_item, button];
    if button == nil {
        return;
    }

    let selected = settings.selected_player;
    let symbol = selected.map_or(SYMBOL_IDLE, TargetApp::symbol_name);
    let description = selected.map_or("Media Butler", TargetApp::display_name);
    let image: id = msg_send![
        get_class("NSImage"),
        imageWithSystemSymbolName: &*nsstring(symbol),
        accessibilityDescription: &*nsstring(description)
    ];
    if image == nil {
        // Symbols are missing before macOS 11.
        let _: () = msg_send![button, setTitle: &*nsstring("MB")];
    } else {
        let _: () = msg_send![image, setTemplate: YES];
        let _: () = msg_send![button, setImage: image];
    }

    let ns_color = get_class("NSColor");
    let tint: id = match selected {
        Some(TargetApp::Spotify) => msg_send![ns_color, systemGreenColor],
        Some(TargetApp::AppleMusic) => msg_send![ns_color, systemPinkColor],
        None => nil,
    };
    let _: () = msg_send![button, setContentTintColor: tint];
    let _: () = msg_send![button, setNeedsDisplay: YES];
}
