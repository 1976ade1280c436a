//! Ergonomic macros.
//!
//! - [`macro@crate::args`] - Builds a flat `key, value, ...` list of mixed types for
//!   [`Builder::args`](crate::Builder::args).
//! - [`macro@crate::errorf`] - Creates an annotated error from a format string.
//! - [`macro@crate::bail`] - Returns early with an annotated error.
//!
//! # Examples
//!
//! ```
//! use error_trail::{args, errorf, prefix, Value};
//!
//! let user_id = 42;
//! let err = errorf!(prefix("auth").args(args!["user_id", user_id, "retry", true]); "user {} locked", user_id);
//!
//! assert_eq!(err.to_string(), "auth: user 42 locked");
//! assert_eq!(err.value("retry"), Some(&Value::Bool(true)));
//! ```

/// Builds a `Vec<Value>` from heterogeneous items.
///
/// Items alternate between keys and values. Each item only needs
/// `Into<Value>`; keys that are not strings are stored in their display form.
///
/// ```
/// use error_trail::{args, Value};
///
/// let items = args!["id", 7, "ok", false];
/// assert_eq!(items, vec![Value::from("id"), Value::from(7), Value::from("ok"), Value::from(false)]);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    ($($item:expr),* $(,)?) => {{
        let items: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($item)),*];
        items
    }};
}

/// Creates an annotated error from format arguments.
///
/// - `errorf!("fmt", args...)` uses a default [`Builder`](crate::Builder).
/// - `errorf!(builder; "fmt", args...)` uses the given builder.
///
/// The recorded location is the macro call site.
///
/// ```
/// use error_trail::{errorf, suffix};
///
/// let err = errorf!("port {} in use", 8080);
/// assert_eq!(err.to_string(), "port 8080 in use");
///
/// let err = errorf!(suffix("retrying"); "port {} in use", 8080);
/// assert_eq!(err.to_string(), "port 8080 in use: retrying");
/// ```
#[macro_export]
macro_rules! errorf {
    ($builder:expr; $($arg:tt)+) => {
        $crate::Builder::errorf(&$builder, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::Builder::errorf(&$crate::Builder::default(), ::std::format_args!($($arg)+))
    };
}

/// Returns early with an annotated error.
///
/// - `bail!(err)` wraps `err` with the call site only.
/// - `bail!(builder; err)` wraps `err` with the given builder.
///
/// The error is converted with `Into` into the function's error type.
///
/// ```
/// use error_trail::{bail, prefix, Const, Trail};
///
/// const EMPTY: Const = Const("empty input");
///
/// fn check(input: &str) -> Result<usize, Trail> {
///     if input.is_empty() {
///         bail!(prefix("check"); EMPTY);
///     }
///     Ok(input.len())
/// }
///
/// let err = check("").unwrap_err();
/// assert_eq!(err.to_string(), "check: empty input");
/// assert!(err.is(&EMPTY));
/// ```
#[macro_export]
macro_rules! bail {
    ($builder:expr; $err:expr $(,)?) => {
        return ::core::result::Result::Err(
            ::core::convert::Into::into($crate::Builder::wrap(&$builder, $err)),
        )
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err(
            ::core::convert::Into::into($crate::Builder::wrap(&$crate::Builder::default(), $err)),
        )
    };
}
