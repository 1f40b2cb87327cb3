use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize test logging with appropriate log level
///
/// Logs go through the test writer, so they only show up for failing tests.
/// Defaults to `error`; set LOG_LEVEL (or RUST_LOG) for more detail.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .ok()
            .or_else(|| {
                std::env::var("LOG_LEVEL")
                    .ok()
                    .and_then(|level| EnvFilter::try_new(level).ok())
            })
            .unwrap_or_else(|| EnvFilter::new("error"));

        // Another harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
