//! Free-function entry points.
//!
//! Each function starts from a default [`Builder`]. The terminal ones
//! ([`wrap`], [`new`], [`errorf`]) are `#[track_caller]`, so the location
//! they record is that of *their* caller.
//!
//! ```
//! use error_trail::{args, get, prefix, wrap};
//!
//! fn read() -> Result<(), error_trail::Trail> {
//!     Err(prefix("reading").args(args!["file", "a.txt"]).new_error("denied"))
//! }
//!
//! let err = wrap(read().unwrap_err());
//! assert_eq!(err.frames().len(), 2);
//! assert_eq!(err.to_string(), "reading: denied");
//! assert_eq!(get(&err).value("file").and_then(|v| v.as_str()), Some("a.txt"));
//! ```

use crate::location::{Resolver, Style};
use crate::render::Attr;
use crate::types::{get, BoxError, Builder, Trail, Value};
use std::error::Error;
use std::fmt;

/// Annotates `err` with the caller's location.
#[track_caller]
pub fn wrap<E>(err: E) -> Trail
where
    E: Into<BoxError>,
{
    Builder::default().wrap(err)
}

/// Creates an annotated error with `message`.
#[track_caller]
pub fn new(message: impl Into<String>) -> Trail {
    Builder::default().new_error(message)
}

/// Creates an annotated error from format arguments.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) -> Trail {
    Builder::default().errorf(args)
}

/// Builder that skips `skip` extra frames.
#[inline]
pub fn skip(skip: usize) -> Builder {
    Builder::default().skip(skip)
}

/// Builder with metadata from a flat `key, value, ...` list.
#[inline]
pub fn args<I, V>(items: I) -> Builder
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Builder::default().args(items)
}

/// Builder with one metadata pair.
#[inline]
pub fn arg(key: impl Into<Value>, value: impl Into<Value>) -> Builder {
    Builder::default().arg(key, value)
}

/// Builder with a message prefix.
#[inline]
pub fn prefix(text: impl Into<String>) -> Builder {
    Builder::default().prefix(text)
}

/// Builder with a message suffix.
#[inline]
pub fn suffix(text: impl Into<String>) -> Builder {
    Builder::default().suffix(text)
}

/// Builder using a stack resolver with `style`.
#[inline]
pub fn style(style: Style) -> Builder {
    Builder::default().style(style)
}

/// Builder using a custom resolver.
#[inline]
pub fn resolver(resolver: impl Resolver + 'static) -> Builder {
    Builder::default().resolver(resolver)
}

/// Log attribute for any error: the grouped frames of its trail, or a plain
/// `error` string when it carries none.
///
/// ```
/// use error_trail::{attr, render::AttrValue, Value};
///
/// let plain = std::io::Error::other("disk full");
/// let a = attr(&plain);
/// assert_eq!(a.name, "error");
/// assert_eq!(a.value, AttrValue::Scalar(Value::from("disk full")));
/// ```
pub fn attr(err: &(dyn Error + 'static)) -> Attr {
    let view = get(err);
    crate::render::attr(&err.to_string(), view.frames())
}
