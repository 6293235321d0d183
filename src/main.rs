#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

#[cfg(target_os = "macos")]
mod macos_main;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    media_butler::events::init_event_bus();

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        tracing::error!("Media Butler only runs on macOS");
        std::process::exit(1);
    }
}
