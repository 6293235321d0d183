//! Inter-app control: AppleScript execution and workspace remediation.

pub mod applescript;
pub mod workspace;

pub use applescript::{AppleScriptEngine, CompiledScript};
pub use workspace::WorkspaceRemediator;
