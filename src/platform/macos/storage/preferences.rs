//! Persistence of settings to NSUserDefaults.
//!
//! This module provides the raw NSUserDefaults accessors and a
//! [`Preferences`] implementation over the standard user defaults.

use crate::model::{AppSettings, Preferences};
use crate::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, nsstring, nsstring_to_string,
};

unsafe fn standard_defaults() -> id {
    msg_send![get_class("NSUserDefaults"), standardUserDefaults]
}

/// Reads a string from NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let value: id = msg_send![standard_defaults(), stringForKey: &*nsstring(key)];
    nsstring_to_string(value)
}

/// Saves a string to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_string(key: &str, val: &str) {
    let _: () = msg_send![
        standard_defaults(),
        setObject: &*nsstring(val),
        forKey: &*nsstring(key)
    ];
}

/// Reads a boolean from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str) -> Option<bool> {
    let ud = standard_defaults();
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    if obj == nil {
        None
    } else {
        Some(msg_send![ud, boolForKey: &*k])
    }
}

/// Saves a boolean to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let _: () = msg_send![standard_defaults(), setBool: val, forKey: &*nsstring(key)];
}

/// Removes a key from NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_remove(key: &str) {
    let _: () = msg_send![standard_defaults(), removeObjectForKey: &*nsstring(key)];
}

/// [`Preferences`] over `+[NSUserDefaults standardUserDefaults]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDefaults;

impl Preferences for UserDefaults {
    fn get_string(&self, key: &str) -> Option<String> {
        autoreleasepool(|| unsafe { prefs_get_string(key) })
    }

    fn set_string(&mut self, key: &str, value: &str) {
        autoreleasepool(|| unsafe { prefs_set_string(key, value) })
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        autoreleasepool(|| unsafe { prefs_get_bool(key) })
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        autoreleasepool(|| unsafe { prefs_set_bool(key, value) })
    }

    fn remove(&mut self, key: &str) {
        autoreleasepool(|| unsafe { prefs_remove(key) })
    }
}

/// Loads the persisted settings.
pub fn load_settings() -> AppSettings {
    AppSettings::load(&UserDefaults)
}
