//! The single, explicitly owned application instance.
//!
//! `ButlerApp` is built once at startup, handed to the status bar
//! controller, and shut down from the Quit item or the termination
//! observer. It owns the target selector and the event tap controller.

use std::sync::Arc;

use tracing::{info, warn};

use crate::media::{
    ensure_accessibility, CommandDispatcher, EventTapController, KeyInterceptor, Remediator,
    TargetSelector,
};
use crate::model::{AppSettings, Preferences, TargetApp, PREF_LAUNCH_AT_LOGIN, UPDATES_URL};
use crate::platform::macos::automation::{AppleScriptEngine, WorkspaceRemediator};
use crate::platform::macos::ffi::SystemAccessibility;
use crate::platform::macos::input::CgEventTap;
use crate::platform::macos::storage::{
    launch_at_login_status, load_settings, set_launch_at_login, UserDefaults,
};

pub struct ButlerApp {
    settings: AppSettings,
    prefs: UserDefaults,
    selector: Arc<TargetSelector>,
    tap: EventTapController<CgEventTap>,
    remediator: WorkspaceRemediator,
}

impl ButlerApp {
    /// Restore settings and wire the interception pipeline (not yet active).
    pub fn new() -> Self {
        let settings = load_settings();
        let selector = Arc::new(TargetSelector::new(settings.selected_player));

        let dispatcher = CommandDispatcher::new(AppleScriptEngine::new(), WorkspaceRemediator::new());
        let interceptor = KeyInterceptor::new(Arc::clone(&selector), dispatcher);
        let tap = EventTapController::new(CgEventTap::new(), Arc::new(interceptor));

        Self {
            settings,
            prefs: UserDefaults,
            selector,
            tap,
            remediator: WorkspaceRemediator::new(),
        }
    }

    /// Install the event tap and bring the login item in line with the
    /// stored flag. A tap failure is not retried; the user is pointed at
    /// the Accessibility settings instead.
    pub fn start(&mut self) {
        if self.tap.activate().is_err() {
            ensure_accessibility(&SystemAccessibility, &self.remediator);
        }
        self.sync_login_item();
        info!(
            player = self.settings.selected_player.map_or("none", TargetApp::display_name),
            "Media Butler started"
        );
    }

    fn sync_login_item(&self) {
        let wanted = self.settings.launch_at_login;
        if launch_at_login_status() == Some(wanted) {
            return;
        }
        if let Err(err) = set_launch_at_login(wanted) {
            warn!(%err, "could not update login item");
        }
    }

    /// Menu selection: choosing the checked player clears it.
    pub fn toggle_player(&mut self, app: TargetApp) {
        let selection = self.settings.toggle_player(app);
        self.selector.select(selection);
        self.settings.save_selection(&mut self.prefs);
        info!(
            player = selection.map_or("none", TargetApp::display_name),
            "player selection changed"
        );

        if selection.is_some() {
            ensure_accessibility(&SystemAccessibility, &self.remediator);
        }
    }

    pub fn toggle_launch_at_login(&mut self) {
        self.settings.launch_at_login = !self.settings.launch_at_login;
        self.prefs
            .set_bool(PREF_LAUNCH_AT_LOGIN, self.settings.launch_at_login);
        if let Err(err) = set_launch_at_login(self.settings.launch_at_login) {
            warn!(%err, "could not update login item");
        }
    }

    pub fn open_updates_page(&self) {
        self.remediator.open_url(UPDATES_URL);
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Tear the event tap down. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.tap.deactivate();
    }
}

impl Default for ButlerApp {
    fn default() -> Self {
        Self::new()
    }
}
