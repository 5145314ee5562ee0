//! Standardized span constructors for formatter observability.

pub mod spans {
    use tracing::{Span, debug_span};

    /// Create a span for rendering one message.
    pub fn render(len: usize) -> Span {
        debug_span!("render", len)
    }

    /// Create a span for building a formatter from a config.
    pub fn configure(palette: usize) -> Span {
        debug_span!("configure", palette)
    }
}
