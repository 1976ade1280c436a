//! Extension trait for annotating the error of a `Result` in place.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::Trail;
//!
//! fn load_config() -> Result<String, Trail> {
//!     std::fs::read_to_string("/definitely/not/here.toml")
//!         .ctx("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration file: "));
//! assert_eq!(err.frames().len(), 1);
//! ```

use crate::location::keep_frame;
use crate::types::{BoxError, Builder, Trail};
use std::panic::Location;

/// Adds annotation methods to `Result`.
///
/// `Ok` values pass through untouched and no location is resolved for them.
/// On `Err`, the location recorded is the caller of the method.
pub trait ResultExt<T, E> {
    /// Annotates the error with everything configured on `builder`.
    fn trail(self, builder: &Builder) -> Result<T, Trail>;

    /// Like [`trail`](Self::trail), building the builder only on error.
    fn trail_with<F>(self, f: F) -> Result<T, Trail>
    where
        F: FnOnce() -> Builder;

    /// Annotates the error with a prefix.
    fn ctx(self, prefix: &str) -> Result<T, Trail>;

    /// Annotates the error with the call site only.
    fn wrap_err(self) -> Result<T, Trail>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    #[inline(never)]
    fn trail(self, builder: &Builder) -> Result<T, Trail> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(keep_frame(builder.annotate(e.into(), Location::caller()))),
        }
    }

    #[track_caller]
    #[inline(never)]
    fn trail_with<F>(self, f: F) -> Result<T, Trail>
    where
        F: FnOnce() -> Builder,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(keep_frame(f().annotate(e.into(), Location::caller()))),
        }
    }

    #[track_caller]
    #[inline(never)]
    fn ctx(self, prefix: &str) -> Result<T, Trail> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(keep_frame(Builder::default().prefix(prefix).annotate(e.into(), Location::caller()))),
        }
    }

    #[track_caller]
    #[inline(never)]
    fn wrap_err(self) -> Result<T, Trail> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(keep_frame(Builder::default().annotate(e.into(), Location::caller()))),
        }
    }
}
