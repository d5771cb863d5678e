//! Process-level setup: logging and frame pacing.

use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::formatter::CustomFormatter;

/// Sleeps out the rest of a frame.
///
/// Spins while focused for accurate pacing; yields to the OS otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default `debug` filter.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().event_format(CustomFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
}
