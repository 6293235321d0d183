//! Lifecycle of the process-wide event tap.
//!
//! [`EventTapController`] owns a [`TapBackend`] and moves through
//! `Uninitialized → Active → Disposed`. Disposed is terminal: a controller
//! that failed to install or was torn down never installs again.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::error::{ButlerError, Result};
use crate::media::interceptor::{Disposition, EventSink, HookControl};
use crate::media::keys::RawEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    Uninitialized,
    Active,
    Disposed,
}

/// OS binding for the tap.
///
/// `uninstall` must not return while a callback is still running, and no
/// callback may reach the sink afterwards.
pub trait TapBackend {
    fn install(&mut self, sink: Arc<dyn EventSink>) -> Result<()>;
    fn uninstall(&mut self);
    fn is_installed(&self) -> bool;
}

pub struct EventTapController<B: TapBackend> {
    backend: B,
    sink: Arc<dyn EventSink>,
    state: HookState,
}

impl<B: TapBackend> EventTapController<B> {
    pub fn new(backend: B, sink: Arc<dyn EventSink>) -> Self {
        Self {
            backend,
            sink,
            state: HookState::Uninitialized,
        }
    }

    /// Install the tap. On failure the controller is disposed and the
    /// process carries on without interception.
    pub fn activate(&mut self) -> Result<()> {
        match self.state {
            HookState::Active => {
                debug!("event tap already active");
                Ok(())
            }
            HookState::Disposed => Err(ButlerError::HookDisposed),
            HookState::Uninitialized => match self.backend.install(Arc::clone(&self.sink)) {
                Ok(()) => {
                    self.state = HookState::Active;
                    info!("media key interception active");
                    Ok(())
                }
                Err(err) => {
                    self.state = HookState::Disposed;
                    error!(%err, "media key interception unavailable");
                    Err(err)
                }
            },
        }
    }

    /// Tear the tap down. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        match self.state {
            HookState::Active => {
                self.backend.uninstall();
                self.state = HookState::Disposed;
                info!("media key interception stopped");
            }
            HookState::Uninitialized => self.state = HookState::Disposed,
            HookState::Disposed => {}
        }
    }

    /// Route one event. Everything passes through unless the tap is active.
    pub fn handle(&self, event: &RawEvent, hook: &dyn HookControl) -> Disposition {
        if self.state != HookState::Active {
            return Disposition::PassThrough;
        }
        self.sink.on_event(event, hook)
    }

    pub fn state(&self) -> HookState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == HookState::Active
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: TapBackend> Drop for EventTapController<B> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
