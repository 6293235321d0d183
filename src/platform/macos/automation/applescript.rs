//! `ScriptEngine` backed by `NSAppleScript`.
//!
//! Compilation and execution are synchronous and run on the tap callback;
//! a slow player stalls media key delivery until the script returns.

use objc2::rc::Allocated;

use crate::media::{ScriptEngine, ScriptFailure};
use crate::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, nsstring, nsstring_to_string, AnyObject,
    Retained,
};

const ERROR_NUMBER_KEY: &str = "NSAppleScriptErrorNumber";
const ERROR_MESSAGE_KEY: &str = "NSAppleScriptErrorMessage";

/// A compiled `NSAppleScript` instance.
pub struct CompiledScript(Retained<AnyObject>);

#[derive(Debug, Clone, Copy, Default)]
pub struct AppleScriptEngine;

impl AppleScriptEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Read the error number and message out of an AppleScript error dictionary.
///
/// # Safety
/// `info` must be nil or the dictionary returned by `NSAppleScript`.
unsafe fn failure_from_info(info: id) -> ScriptFailure {
    if info == nil {
        return ScriptFailure::new(None, "unknown AppleScript error");
    }

    let number: id = msg_send![info, objectForKey: &*nsstring(ERROR_NUMBER_KEY)];
    let code = if number == nil {
        None
    } else {
        let n: isize = msg_send![number, integerValue];
        Some(n as i64)
    };

    let message: id = msg_send![info, objectForKey: &*nsstring(ERROR_MESSAGE_KEY)];
    let message =
        nsstring_to_string(message).unwrap_or_else(|| "unknown AppleScript error".to_string());

    ScriptFailure::new(code, message)
}

impl ScriptEngine for AppleScriptEngine {
    type Script = CompiledScript;

    fn compile(&self, source: &str) -> Result<CompiledScript, ScriptFailure> {
        autoreleasepool(|| unsafe {
            let alloc: Allocated<AnyObject> = msg_send![get_class("NSAppleScript"), alloc];
            let script: Option<Retained<AnyObject>> =
                msg_send![alloc, initWithSource: &*nsstring(source)];
            let script = script
                .ok_or_else(|| ScriptFailure::new(None, "NSAppleScript rejected the source"))?;

            let mut info: id = nil;
            let compiled: bool = msg_send![&*script, compileAndReturnError: &mut info];
            if !compiled {
                return Err(failure_from_info(info));
            }
            Ok(CompiledScript(script))
        })
    }

    fn execute(&self, script: &CompiledScript) -> Result<(), ScriptFailure> {
        autoreleasepool(|| unsafe {
            let mut info: id = nil;
            let result: id = msg_send![&*script.0, executeAndReturnError: &mut info];
            if result == nil {
                Err(failure_from_info(info))
            } else {
                Ok(())
            }
        })
    }
}
