//! Turns a media key into an AppleScript run against the selected player.
//!
//! Each call walks `Compiling → Executing → Done | Failed`. Failures are
//! never retried; the two well-known AppleScript errors trigger a
//! fire-and-forget remediation instead.

use tracing::{debug, error, info, warn};

use crate::error::ButlerError;
use crate::media::keys::MediaKey;
use crate::media::scripts::control_script;
use crate::model::constants::{
    AUTOMATION_SETTINGS_URL, SCRIPT_ERR_NOT_AUTHORIZED, SCRIPT_ERR_NOT_RUNNING,
};
use crate::model::TargetApp;

/// Error reported by a script engine, mirroring the
/// `NSAppleScriptErrorNumber` / `NSAppleScriptErrorMessage` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFailure {
    pub code: Option<i64>,
    pub message: String,
}

impl ScriptFailure {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Compiles and runs control scripts.
pub trait ScriptEngine {
    type Script;

    fn compile(&self, source: &str) -> Result<Self::Script, ScriptFailure>;
    fn execute(&self, script: &Self::Script) -> Result<(), ScriptFailure>;
}

/// OS affordances used to recover from failed dispatches. Both calls must
/// return without waiting for the action to finish.
pub trait Remediator {
    fn open_url(&self, url: &str);
    /// Launch the player, bringing it forward when `activate` is set.
    fn launch_app(&self, app: TargetApp, activate: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No script for this key; nothing ran.
    Unmapped,
    Done,
    Failed(ButlerError),
}

impl DispatchOutcome {
    /// A script was attempted, so the key event belongs to us.
    pub fn dispatched(&self) -> bool {
        !matches!(self, DispatchOutcome::Unmapped)
    }
}

/// Map an execution failure onto the error taxonomy.
pub fn classify_failure(app: TargetApp, failure: ScriptFailure) -> ButlerError {
    match failure.code {
        Some(SCRIPT_ERR_NOT_AUTHORIZED) => ButlerError::AutomationPermissionDenied(app),
        Some(SCRIPT_ERR_NOT_RUNNING) => ButlerError::TargetNotRunning(app),
        code => ButlerError::ScriptExecutionFailed {
            app,
            code: code.unwrap_or_default(),
            message: failure.message,
        },
    }
}

pub struct CommandDispatcher<E, R> {
    engine: E,
    remediator: R,
}

impl<E: ScriptEngine, R: Remediator> CommandDispatcher<E, R> {
    pub fn new(engine: E, remediator: R) -> Self {
        Self { engine, remediator }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn remediator(&self) -> &R {
        &self.remediator
    }

    /// Run the script mapped to `key` against `app`.
    pub fn dispatch(&self, key: MediaKey, app: TargetApp) -> DispatchOutcome {
        let Some(source) = control_script(key, app) else {
            debug!(?key, %app, "no script mapped, passing through");
            return DispatchOutcome::Unmapped;
        };

        let script = match self.engine.compile(source) {
            Ok(script) => script,
            Err(failure) => {
                error!(?key, %app, code = ?failure.code, "script compile failed: {}", failure.message);
                return DispatchOutcome::Failed(ButlerError::ScriptCompileFailed(failure.message));
            }
        };

        match self.engine.execute(&script) {
            Ok(()) => {
                debug!(?key, %app, "control script executed");
                DispatchOutcome::Done
            }
            Err(failure) => {
                let err = classify_failure(app, failure);
                self.recover(&err);
                DispatchOutcome::Failed(err)
            }
        }
    }

    fn recover(&self, err: &ButlerError) {
        match err {
            ButlerError::AutomationPermissionDenied(app) => {
                warn!(%app, "automation permission required, opening settings");
                self.remediator.open_url(AUTOMATION_SETTINGS_URL);
                self.remediator.launch_app(*app, true);
            }
            ButlerError::TargetNotRunning(app) => {
                info!(%app, "player not running, launching it");
                self.remediator.launch_app(*app, false);
            }
            other => error!("{other}"),
        }
    }
}
