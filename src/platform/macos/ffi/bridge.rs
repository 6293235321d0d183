//! Thin helpers over `objc2` for dynamic message sending.
//!
//! Most AppKit calls in this crate go through `msg_send!` on raw `id`
//! pointers; this module collects the aliases, constants and helpers they
//! share.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{CStr, CString};

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel, ClassType};

// ============================================================================
// Type aliases
// ============================================================================

/// Objective-C object pointer.
///
/// Prefer typed pointers like `&NSString` or `Retained<NSString>` when the
/// type is known. Use `id` only for dynamic/unknown types.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `BOOL` YES (not Rust bool).
pub const YES: Bool = Bool::YES;

/// Objective-C `BOOL` NO (not Rust bool).
pub const NO: Bool = Bool::NO;

// ============================================================================
// Foundation / AppKit re-exports
// ============================================================================

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2_app_kit::NSApplication;

pub use block2::RcBlock;

pub use objc2::rc::Retained;

// ============================================================================
// Helper functions
// ============================================================================

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
///
/// Pass it to `msg_send!` as `&*s`.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Copy an NSString (or nil) into a Rust `String`.
///
/// # Safety
/// `obj` must be nil or a valid NSString.
pub unsafe fn nsstring_to_string(obj: id) -> Option<String> {
    if obj.is_null() {
        return None;
    }
    let utf8: *const std::ffi::c_char = msg_send![obj, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

// ============================================================================
// Runtime helpers
// ============================================================================

/// Get a class by name, panicking if not found.
///
/// Only used for classes that ship with every supported macOS version.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

// ============================================================================
// Object trait extensions for ivar access
// ============================================================================

use objc2::encode::Encode;

/// Extension trait for accessing instance variables on AnyObject.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

// ============================================================================
// NSAutoreleasePool replacement
// ============================================================================

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    objc2::rc::autoreleasepool(|_| f())
}
