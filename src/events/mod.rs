//! Event system for decoupled inter-module communication.
//!
//! Menu actions are published as [`AppEvent`]s on an `mpsc` channel and
//! handled in one place by the platform dispatcher.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ Status menu │
//! └──────┬──────┘
//!        │ publish()
//!        ▼
//! ┌─────────────────────────────────────────┐
//! │               EventBus                  │
//! │             (mpsc channel)              │
//! └───────────────────┬─────────────────────┘
//!                     │ take_event()
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │              Dispatcher                 │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use media_butler::events::{self, AppEvent};
//! use media_butler::model::TargetApp;
//!
//! events::init_event_bus();
//! events::publish(AppEvent::SelectPlayer(TargetApp::Spotify));
//!
//! while let Some(event) = events::take_event() {
//!     // Handle event...
//! }
//! ```

pub mod bus;
pub mod global;
pub mod types;

// Re-export main types for convenient access
pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher, take_event};
pub use types::AppEvent;
