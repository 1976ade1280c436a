//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn load_config() -> Result<String, Trail> {
//!     std::fs::read_to_string("/no/such/config.toml").ctx("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(get(&err).value("missing-key").is_none());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`args!`], [`errorf!`], [`bail!`]
//! - **Types**: [`Trail`], [`Builder`], [`Value`], [`Const`]
//! - **Functions**: [`wrap`], [`get`], [`is`]
//! - **Traits**: [`ResultExt`]

// Macros
pub use crate::{args, bail, errorf};

// Core types
pub use crate::types::{Builder, Const, Trail, Value};

// Functions
pub use crate::context::wrap;
pub use crate::types::{get, is};

// Traits
pub use crate::traits::ResultExt;
