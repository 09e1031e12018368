//! Logging initialization for tests.
//!
//! The crate itself only emits debug events on its two failure paths; this
//! helper routes them through the tracing test writer so `cargo test`
//! captures them per-test.

use std::sync::Once;

/// Initialize tracing for tests with the test writer.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("tristate=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}
