// Diagnostics setup. Recoverable inventory and file errors are reported to
// the user on stdout and logged at debug only, so the default filter keeps
// stderr silent during a normal session.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `RUST_LOG` if it parses, otherwise `DEFAULT_LOG_FILTER`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the stderr subscriber for the binary. Call once.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
