//! Per-event decision: consume a media key or let it through.

use std::sync::Arc;

use tracing::{trace, warn};

use crate::media::dispatcher::{CommandDispatcher, Remediator, ScriptEngine};
use crate::media::keys::{classify, RawEvent, NX_SUBTYPE_AUX_CONTROL_BUTTONS};
use crate::media::selector::TargetSelector;

/// What the tap callback tells the OS to do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Swallow the event; no other process sees it.
    Consume,
    PassThrough,
}

/// Handle the sink may use to switch a disabled tap back on.
pub trait HookControl {
    fn reenable(&self);
}

/// Receives every event the tap delivers.
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: &RawEvent, hook: &dyn HookControl) -> Disposition;
}

/// Routes media key-downs to the selected player.
pub struct KeyInterceptor<E, R> {
    selector: Arc<TargetSelector>,
    dispatcher: CommandDispatcher<E, R>,
}

impl<E, R> KeyInterceptor<E, R>
where
    E: ScriptEngine,
    R: Remediator,
{
    pub fn new(selector: Arc<TargetSelector>, dispatcher: CommandDispatcher<E, R>) -> Self {
        Self {
            selector,
            dispatcher,
        }
    }

    pub fn selector(&self) -> &Arc<TargetSelector> {
        &self.selector
    }

    pub fn dispatcher(&self) -> &CommandDispatcher<E, R> {
        &self.dispatcher
    }
}

impl<E, R> EventSink for KeyInterceptor<E, R>
where
    E: ScriptEngine + Send + Sync,
    R: Remediator + Send + Sync,
{
    fn on_event(&self, event: &RawEvent, hook: &dyn HookControl) -> Disposition {
        let (subtype, data1) = match *event {
            RawEvent::TapDisabled(reason) => {
                warn!(?reason, "event tap disabled by the system, re-enabling");
                hook.reenable();
                return Disposition::PassThrough;
            }
            RawEvent::SystemDefined { subtype, data1 } => (subtype, data1),
            RawEvent::Other(_) => return Disposition::PassThrough,
        };

        if subtype != NX_SUBTYPE_AUX_CONTROL_BUTTONS {
            return Disposition::PassThrough;
        }

        let classified = classify(data1);
        let Some(key) = classified.key else {
            return Disposition::PassThrough;
        };
        if !classified.pressed {
            return Disposition::PassThrough;
        }
        let Some(app) = self.selector.current() else {
            trace!(?key, "no player selected");
            return Disposition::PassThrough;
        };

        if self.dispatcher.dispatch(key, app).dispatched() {
            Disposition::Consume
        } else {
            Disposition::PassThrough
        }
    }
}
