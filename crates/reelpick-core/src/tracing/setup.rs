//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the reelpick tracing/logging system.
///
/// Reads the `REELPICK_LOG` environment variable for per-module log levels.
/// Format: `REELPICK_LOG=reelpick_analysis::trie=debug,reelpick_core=warn`
///
/// Falls back to `reelpick=info` if `REELPICK_LOG` is not set or is invalid.
/// Calling it more than once is a no-op. If another global subscriber is
/// already installed, that subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

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
