//! FFI bindings for CoreGraphics event taps.
//!
//! `core-graphics` exposes the tap enums but its safe `CGEventTap` wrapper
//! cannot subscribe to `NSSystemDefined` (type 14), so the tap itself is
//! declared here with a raw `u32` event type.

use std::ffi::c_void;

use core_foundation::mach_port::CFMachPortRef;
use core_graphics::event::{
    CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement, CGEventTapProxy,
};
use objc2::encode::{Encoding, RefEncode};

// === Types ===

/// Opaque CGEvent type for correct objc2 encoding.
/// objc2 expects `^{__CGEvent=}` not `^v` (void pointer).
#[repr(C)]
pub struct CGEvent {
    _private: [u8; 0],
}

// SAFETY: CGEvent is an opaque Core Graphics type
unsafe impl RefEncode for CGEvent {
    const ENCODING_REF: Encoding = Encoding::Pointer(&Encoding::Struct("__CGEvent", &[]));
}

pub type CGEventRef = *mut CGEvent;

pub type CGEventMask = u64;

/// Tap callback. The event type is taken as `u32` because the tap-disabled
/// sentinels are not valid `CGEventType` discriminants.
pub type CGEventTapCallBack = unsafe extern "C" fn(
    proxy: CGEventTapProxy,
    event_type: u32,
    event: CGEventRef,
    user_info: *mut c_void,
) -> CGEventRef;

// === Event Types ===

/// `NSSystemDefined` / `NX_SYSDEFINED`: media and other special keys.
pub const NX_SYSDEFINED: u32 = 14;

/// `kCGEventTapDisabledByTimeout`
pub const TAP_DISABLED_BY_TIMEOUT: u32 = 0xFFFF_FFFE;

/// `kCGEventTapDisabledByUserInput`
pub const TAP_DISABLED_BY_USER_INPUT: u32 = 0xFFFF_FFFF;

// === FFI Declarations - CoreGraphics ===

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    pub fn CGEventTapCreate(
        tap: CGEventTapLocation,
        place: CGEventTapPlacement,
        options: CGEventTapOptions,
        events_of_interest: CGEventMask,
        callback: CGEventTapCallBack,
        user_info: *mut c_void,
    ) -> CFMachPortRef;

    pub fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);
}

// === FFI Declarations - CoreFoundation ===

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFMachPortInvalidate(port: CFMachPortRef);
}

/// Mask bit for a single CGEvent type.
#[inline]
pub const fn event_mask_bit(event_type: u32) -> CGEventMask {
    1 << event_type
}
