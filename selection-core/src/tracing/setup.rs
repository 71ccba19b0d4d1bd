//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SELECTION_LOG";

/// Filter used when `SELECTION_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "selection_core=info";

/// Initialize the tracing subscriber.
///
/// Reads `SELECTION_LOG` for filter directives, e.g.
/// `SELECTION_LOG=selection_core::selection=debug`.
///
/// Idempotent: only the first call installs a subscriber. If another
/// global subscriber was already set by the host application, that one
/// is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
