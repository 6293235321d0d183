//! Media key interception pipeline.
//!
//! ```text
//! tap callback ──► EventTapController::handle
//!                        │
//!                        ▼
//!                  KeyInterceptor ──► classify(data1)
//!                        │
//!          key-down + player selected
//!                        │
//!                        ▼
//!                CommandDispatcher ──► ScriptEngine / Remediator
//! ```
//!
//! Everything here is plain Rust; the macOS bindings for the tap, the
//! script engine and the remediator live in `platform::macos`.

pub mod dispatcher;
pub mod interceptor;
pub mod keys;
pub mod permissions;
pub mod scripts;
pub mod selector;
pub mod tap;

pub use dispatcher::{
    classify_failure, CommandDispatcher, DispatchOutcome, Remediator, ScriptEngine, ScriptFailure,
};
pub use interceptor::{Disposition, EventSink, HookControl, KeyInterceptor};
pub use keys::{classify, ClassifiedKey, MediaKey, RawEvent, TapDisabledReason};
pub use permissions::{ensure_accessibility, AccessibilityProbe};
pub use scripts::control_script;
pub use selector::TargetSelector;
pub use tap::{EventTapController, HookState, TapBackend};
