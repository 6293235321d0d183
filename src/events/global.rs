//! Global access to the application event bus.
//!
//! The bus must be initialized once at application startup via
//! `init_event_bus()`; the status bar target then publishes menu actions
//! with `publish()` and the dispatcher pulls them with `take_event()`.
//!
//! - `Sender` is stored in `OnceLock` - it's `Send + Sync`
//! - `Receiver` is stored in `Mutex` - only accessed from the main thread

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::warn;

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus. Later calls are ignored.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    if SENDER.set(sender).is_err() || RECEIVER.set(Mutex::new(receiver)).is_err() {
        warn!("event bus already initialized");
    }
}

/// Get a publisher handle for the global event bus, if it is initialized.
pub fn publisher() -> Option<EventPublisher> {
    SENDER
        .get()
        .map(|sender| EventPublisher::from_sender(sender.clone()))
}

/// Publish an event to the global event bus.
///
/// Events published before `init_event_bus()` are dropped with a warning.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        Some(sender) => {
            let _ = sender.send(event);
        }
        None => warn!(?event, "event bus not initialized, dropping event"),
    }
}

/// Take the next pending event, if any.
pub fn take_event() -> Option<AppEvent> {
    let receiver = RECEIVER.get()?;
    let receiver = receiver.lock().unwrap_or_else(PoisonError::into_inner);
    receiver.try_recv().ok()
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    std::iter::from_fn(take_event).collect()
}
