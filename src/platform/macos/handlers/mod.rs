//! Handlers that turn bus events into actions.

mod dispatcher;

pub use dispatcher::dispatch_events;
