//! Call-site annotations for errors.
//!
//! error-trail lets each layer of a call stack attach context to an error
//! as it propagates: prefix and suffix text, key-value metadata, and the
//! location of the wrap. The original error stays reachable for identity
//! checks, and the metadata can be recovered later for logging.
//!
//! # Examples
//!
//! ## Wrapping across layers
//!
//! ```
//! use error_trail::{arg, is, prefix, Const, Trail};
//!
//! const REFUSED: Const = Const("connection refused");
//!
//! fn connect() -> Result<(), Trail> {
//!     Err(arg("host", "db-1").prefix("connect").suffix("port 5432").wrap(REFUSED))
//! }
//!
//! fn load_user() -> Result<(), Trail> {
//!     connect().map_err(|e| prefix("load user").arg("id", 7).wrap(e))
//! }
//!
//! let err = load_user().unwrap_err();
//! assert_eq!(err.to_string(), "load user: connect: connection refused: port 5432");
//! assert_eq!(err.frames().len(), 2);
//! assert!(is(&err, &REFUSED));
//! assert_eq!(err.value("host").and_then(|v| v.as_str()), Some("db-1"));
//! ```
//!
//! ## Log-ready records
//!
//! ```
//! use error_trail::{get, Builder};
//!
//! let b = Builder::default().resolver(|_: usize, _: &'static std::panic::Location<'static>| "svc.rs:10".to_string());
//! let err = b.arg("attempt", 3).new_error("timeout");
//!
//! let view = get(&err);
//! assert_eq!(view.records()[0].location(), "svc.rs:10");
//! assert_eq!(view.attr().to_string(), "timeout.svc.rs:10.attempt=3");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Free-function entry points mirroring the builder
pub mod context;
/// Call-site location resolvers
pub mod location;
/// Error annotation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Records and attributes for structured logs
pub mod render;
/// Extension traits
pub mod traits;
/// Trail, Frame, Builder and metadata values
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use context::*;
pub use location::{CallerResolver, Resolver, StackResolver, Style, UNKNOWN};
pub use traits::*;
pub use types::{
    find, get, is, root_cause, BoxError, Builder, Const, Frame, FrameVec, Metadata, Trail,
    TrailRef, Value, MAX_DEPTH, MISSING,
};
