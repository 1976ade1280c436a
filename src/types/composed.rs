//! Plain error values used by the builder.

use crate::types::BoxError;
use std::error::Error;
use std::fmt::{self, Debug, Display};

/// A `const`-constructible error with a fixed message.
///
/// Useful for sentinel errors that callers compare against with
/// [`is`](crate::is).
///
/// # Examples
///
/// ```
/// use error_trail::{is, wrap, Const};
///
/// const NOT_FOUND: Const = Const("not found");
///
/// let err = wrap(NOT_FOUND);
/// assert!(is(&err, &NOT_FOUND));
/// assert_eq!(err.to_string(), "not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Const(pub &'static str);

impl Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for Const {}

/// Error carrying the composed `prefix: message: suffix` text on top of the
/// error it was composed from.
pub(crate) struct Composed {
    message: String,
    source: BoxError,
}

impl Composed {
    /// Applies prefix and suffix to `err`. Returns `err` untouched when there
    /// is nothing to add.
    pub(crate) fn compose(err: BoxError, prefix: &str, suffix: &str) -> BoxError {
        if prefix.is_empty() && suffix.is_empty() {
            return err;
        }

        let mut message = err.to_string();
        if !prefix.is_empty() {
            message = if message.is_empty() {
                prefix.to_owned()
            } else {
                format!("{prefix}: {message}")
            };
        }
        if !suffix.is_empty() {
            if !message.is_empty() {
                message.push_str(": ");
            }
            message.push_str(suffix);
        }

        // a composed message already contains the inner one
        let source = match err.downcast::<Composed>() {
            Ok(inner) => inner.source,
            Err(err) => err,
        };
        Box::new(Self { message, source })
    }

    #[inline]
    pub(crate) fn source_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.source
    }
}

impl Display for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field("message", &self.message)
            .field("source", &self.source)
            .finish()
    }
}

impl Error for Composed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}
