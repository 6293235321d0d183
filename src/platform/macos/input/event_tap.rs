//! `TapBackend` over a CoreGraphics session event tap.
//!
//! The tap delivers `NSSystemDefined` events on the main run loop. The OS
//! only carries a plain `user_info` pointer, so we hand it an integer token
//! and keep the Rust side in a single-slot registry:
//!
//! ```text
//! CGEventTap ──► tap_callback(token) ──► REGISTRY[token] ──► TapContext
//!                                                              │ sink lock
//!                                                              ▼
//!                                                     Arc<dyn EventSink>
//! ```
//!
//! Teardown disables the tap, drops the registry entry, then clears the
//! sink under its lock. The lock is held for the whole callback, so once
//! `uninstall` returns no callback can still be inside the sink.

use std::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, TryLockError};

use core_foundation::base::TCFType;
use core_foundation::mach_port::{CFMachPort, CFMachPortRef};
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop, CFRunLoopSource};
use core_graphics::event::{
    CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement, CGEventTapProxy,
};
use tracing::{debug, error, info};

use crate::error::{ButlerError, Result};
use crate::media::{Disposition, EventSink, HookControl, RawEvent, TapBackend, TapDisabledReason};
use crate::platform::macos::ffi::bridge::{autoreleasepool, get_class, id, msg_send, nil};
use crate::platform::macos::ffi::{
    event_mask_bit, CFMachPortInvalidate, CGEventRef, CGEventTapCreate, CGEventTapEnable,
    NX_SYSDEFINED, TAP_DISABLED_BY_TIMEOUT, TAP_DISABLED_BY_USER_INPUT,
};

/// State shared between the backend and the OS callback.
struct TapContext {
    sink: Mutex<Option<Arc<dyn EventSink>>>,
    port: AtomicPtr<c_void>,
}

/// At most one tap per process.
static REGISTRY: Mutex<Option<(usize, Arc<TapContext>)>> = Mutex::new(None);

static NEXT_TOKEN: AtomicUsize = AtomicUsize::new(1);

fn lookup(token: usize) -> Option<Arc<TapContext>> {
    let registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    match registry.as_ref() {
        Some((t, ctx)) if *t == token => Some(Arc::clone(ctx)),
        _ => None,
    }
}

fn unregister(token: usize) {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if matches!(registry.as_ref(), Some((t, _)) if *t == token) {
        *registry = None;
    }
}

/// Re-enables the tap the callback was invoked for.
struct PortControl(CFMachPortRef);

impl HookControl for PortControl {
    fn reenable(&self) {
        if !self.0.is_null() {
            unsafe { CGEventTapEnable(self.0, true) };
        }
    }
}

impl TapContext {
    /// Decode the event and let the sink decide, holding the sink lock.
    ///
    /// A nested delivery (a script spinning the run loop) or a teardown in
    /// progress finds the lock taken and passes the event through.
    unsafe fn deliver(&self, event_type: u32, event: CGEventRef) -> Disposition {
        let sink = match self.sink.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return Disposition::PassThrough,
        };
        let Some(sink) = sink.as_ref() else {
            return Disposition::PassThrough;
        };

        let raw = decode_event(event_type, event);
        let port = PortControl(self.port.load(Ordering::Acquire) as CFMachPortRef);
        sink.on_event(&raw, &port)
    }
}

/// Reduce a tap event to what the pipeline needs.
///
/// # Safety
/// `event` must be the CGEvent passed to the tap callback.
unsafe fn decode_event(event_type: u32, event: CGEventRef) -> RawEvent {
    match event_type {
        TAP_DISABLED_BY_TIMEOUT => RawEvent::TapDisabled(TapDisabledReason::Timeout),
        TAP_DISABLED_BY_USER_INPUT => RawEvent::TapDisabled(TapDisabledReason::UserInput),
        NX_SYSDEFINED if !event.is_null() => autoreleasepool(|| {
            let ns_event: id = msg_send![get_class("NSEvent"), eventWithCGEvent: event];
            if ns_event == nil {
                return RawEvent::Other(event_type);
            }
            let subtype: i16 = msg_send![ns_event, subtype];
            let data1: isize = msg_send![ns_event, data1];
            RawEvent::SystemDefined {
                subtype,
                data1: data1 as i64,
            }
        }),
        other => RawEvent::Other(other),
    }
}

/// Raw tap callback. Returns null to consume the event, the event itself to
/// pass it on.
unsafe extern "C" fn tap_callback(
    _proxy: CGEventTapProxy,
    event_type: u32,
    event: CGEventRef,
    user_info: *mut c_void,
) -> CGEventRef {
    let Some(ctx) = lookup(user_info as usize) else {
        return event;
    };

    // Unwinding across the C boundary would abort.
    let disposition = catch_unwind(AssertUnwindSafe(|| ctx.deliver(event_type, event)));
    match disposition {
        Ok(Disposition::Consume) => ptr::null_mut(),
        Ok(Disposition::PassThrough) => event,
        Err(_) => {
            error!("panic in media key handler, passing event through");
            event
        }
    }
}

struct InstalledTap {
    token: usize,
    context: Arc<TapContext>,
    port: CFMachPort,
    source: CFRunLoopSource,
    run_loop: CFRunLoop,
}

/// Session-level tap for `NSSystemDefined` events on the current run loop.
#[derive(Default)]
pub struct CgEventTap {
    installed: Option<InstalledTap>,
}

impl CgEventTap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TapBackend for CgEventTap {
    fn install(&mut self, sink: Arc<dyn EventSink>) -> Result<()> {
        if self.installed.is_some() {
            return Ok(());
        }

        let token = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        let context = Arc::new(TapContext {
            sink: Mutex::new(Some(sink)),
            port: AtomicPtr::new(ptr::null_mut()),
        });

        {
            let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
            if registry.is_some() {
                return Err(ButlerError::HookAlreadyActive);
            }
            *registry = Some((token, Arc::clone(&context)));
        }

        let port_ref = unsafe {
            CGEventTapCreate(
                CGEventTapLocation::Session,
                CGEventTapPlacement::HeadInsertEventTap,
                CGEventTapOptions::Default,
                event_mask_bit(NX_SYSDEFINED),
                tap_callback,
                token as *mut c_void,
            )
        };
        if port_ref.is_null() {
            unregister(token);
            return Err(ButlerError::HookCreationFailed);
        }

        let port = unsafe { CFMachPort::wrap_under_create_rule(port_ref) };
        context.port.store(port_ref as *mut c_void, Ordering::Release);

        let source = match port.create_runloop_source(0) {
            Ok(source) => source,
            Err(()) => {
                unregister(token);
                unsafe { CFMachPortInvalidate(port_ref) };
                return Err(ButlerError::HookCreationFailed);
            }
        };

        let run_loop = CFRunLoop::get_current();
        run_loop.add_source(&source, unsafe { kCFRunLoopCommonModes });
        unsafe { CGEventTapEnable(port_ref, true) };
        info!(token, "event tap installed");

        self.installed = Some(InstalledTap {
            token,
            context,
            port,
            source,
            run_loop,
        });
        Ok(())
    }

    fn uninstall(&mut self) {
        let Some(tap) = self.installed.take() else {
            return;
        };

        let port_ref = tap.port.as_concrete_TypeRef();
        unsafe { CGEventTapEnable(port_ref, false) };
        unregister(tap.token);

        // Waits for an in-flight callback to leave the sink.
        tap.context
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        tap.context.port.store(ptr::null_mut(), Ordering::Release);

        tap.run_loop
            .remove_source(&tap.source, unsafe { kCFRunLoopCommonModes });
        unsafe { CFMachPortInvalidate(port_ref) };
        debug!(token = tap.token, "event tap removed");
    }

    fn is_installed(&self) -> bool {
        self.installed.is_some()
    }
}

impl Drop for CgEventTap {
    fn drop(&mut self) {
        self.uninstall();
    }
}
