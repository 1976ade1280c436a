//! Tracing integration for error-trail.
//!
//! Ships trails to the `tracing` ecosystem and records the active span on
//! a builder.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use std::error::Error;

use tracing::{Level, Span};

use crate::context::attr;
use crate::types::Builder;

/// Metadata key used for span names.
pub const SPAN_KEY: &str = "span";

/// Logs `err` as an ERROR event.
///
/// The event carries the display text as `error` and the logfmt rendering of
/// [`attr`](crate::attr) as `trail`.
///
/// # Example
///
/// ```rust,ignore
/// use error_trail::tracing_ext::emit;
///
/// if let Err(err) = load_config() {
///     emit(&err);
/// }
/// ```
pub fn emit(err: &(dyn Error + 'static)) {
    emit_at(Level::ERROR, err);
}

/// Logs `err` at `level`.
pub fn emit_at(level: Level, err: &(dyn Error + 'static)) {
    let trail = attr(err);
    if level == Level::ERROR {
        tracing::error!(error = %err, trail = %trail);
    } else if level == Level::WARN {
        tracing::warn!(error = %err, trail = %trail);
    } else if level == Level::INFO {
        tracing::info!(error = %err, trail = %trail);
    } else if level == Level::DEBUG {
        tracing::debug!(error = %err, trail = %trail);
    } else {
        tracing::trace!(error = %err, trail = %trail);
    }
}

/// Extension trait recording span names as metadata.
pub trait BuilderSpanExt {
    /// Adds the current span's name under [`SPAN_KEY`].
    fn in_current_span(&self) -> Builder;

    /// Adds `span`'s name under [`SPAN_KEY`]; `unknown` for a disabled span.
    fn in_span(&self, span: &Span) -> Builder;
}

impl BuilderSpanExt for Builder {
    fn in_current_span(&self) -> Builder {
        self.in_span(&Span::current())
    }

    fn in_span(&self, span: &Span) -> Builder {
        let name = span.metadata().map(|m| m.name()).unwrap_or(crate::location::UNKNOWN);
        self.arg(SPAN_KEY, name)
    }
}
