//! Integration test common infrastructure.
//!
//! Provides an initialised formatter and tracing output for test runs.

use ircfmt::Formatter;

/// Network name used for channel links in tests.
#[allow(dead_code)]
pub const NETWORK: &str = "libera";

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A formatter with default settings, ready to render.
#[allow(dead_code)]
pub fn formatter() -> Formatter {
    init_tracing();
    let mut formatter = Formatter::new();
    formatter.initialise();
    formatter
}

/// Render `text` on [`NETWORK`] with a default formatter.
#[allow(dead_code)]
pub fn render(text: &str) -> String {
    formatter().exec(Some(text), NETWORK).into_owned()
}
