//! Error types and utilities.
//!
//! - [`Trail`]: the annotated error, a chain of [`Frame`]s over the original error.
//! - [`Builder`]: accumulates prefix, suffix and metadata before wrapping.
//! - [`Value`]: metadata values, including the [`Value::Missing`] placeholder.
//!
//! # Examples
//!
//! ```
//! use error_trail::{args, Builder, CallerResolver};
//!
//! let err = Builder::default()
//!     .resolver(CallerResolver)
//!     .prefix("loading config")
//!     .args(args!["path", "/etc/app.toml"])
//!     .new_error("file not found");
//!
//! assert_eq!(err.to_string(), "loading config: file not found");
//! assert_eq!(err.value("path").and_then(|v| v.as_str()), Some("/etc/app.toml"));
//! ```
use smallvec::SmallVec;

pub mod builder;
pub mod composed;
pub mod frame;
pub mod trail;
pub mod value;

pub use builder::*;
pub use composed::Const;
pub use frame::*;
pub use trail::*;
pub use value::*;

/// Boxed, thread-safe error used as the underlying error of a [`Trail`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// SmallVec-backed frame storage.
///
/// Uses inline storage for one frame, the common case of an error wrapped
/// once before being logged.
pub type FrameVec = SmallVec<[Frame; 1]>;

/// Ordered metadata pairs of a single frame.
pub type Metadata = SmallVec<[(String, Value); 2]>;
