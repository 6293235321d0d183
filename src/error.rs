//! Error taxonomy for the interception pipeline and its collaborators.
//!
//! Every variant is recoverable: the menu bar host keeps running and the
//! failure is logged and remediated through OS affordances (settings deep
//! links, launching the target) rather than surfaced as a dialog.

use thiserror::Error;

use crate::model::TargetApp;

/// Errors reported by the event tap, the command dispatcher and the
/// platform glue around them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ButlerError {
    /// The OS refused to create the event tap.
    #[error("failed to create event tap - check Accessibility permissions")]
    HookCreationFailed,

    /// Another event tap is already active in this process.
    #[error("an event tap is already active in this process")]
    HookAlreadyActive,

    /// The controller was torn down; a fresh one is needed to intercept again.
    #[error("event tap controller has been disposed")]
    HookDisposed,

    #[error("failed to compile control script: {0}")]
    ScriptCompileFailed(String),

    /// AppleScript error -1743: the user has not allowed us to automate the target.
    #[error("not authorized to send Apple events to {0}")]
    AutomationPermissionDenied(TargetApp),

    /// AppleScript error -1728: the target application is not running.
    #[error("{0} is not running")]
    TargetNotRunning(TargetApp),

    #[error("control script for {app} failed ({code}): {message}")]
    ScriptExecutionFailed {
        app: TargetApp,
        code: i64,
        message: String,
    },

    /// An identifier outside the two supported players.
    #[error("unsupported target application: {0}")]
    UnsupportedTarget(String),

    #[error("failed to update login item: {0}")]
    LoginItem(String),
}

pub type Result<T> = std::result::Result<T, ButlerError>;
