//! Logging initialization.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set; otherwise `--verbose` selects
/// `debug`, and the default is `info`. Log output goes to stderr so the
/// match report on stdout stays machine-readable. Safe to call more than
/// once; only the first call installs a subscriber.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let default_level = if verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("mentormatch={default_level}")));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
