//! Extension traits.
//!
//! - [`ResultExt`]: annotate the error side of a `Result` without `map_err`.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::{arg, Trail};
//!
//! fn parse(input: &str) -> Result<u16, Trail> {
//!     input.parse::<u16>().trail(&arg("input", input.to_string()).prefix("parsing port"))
//! }
//!
//! let err = parse("http").unwrap_err();
//! assert_eq!(err.to_string(), "parsing port: invalid digit found in string");
//! assert_eq!(err.value("input").map(ToString::to_string).as_deref(), Some("http"));
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
