//! Metadata values attached to a [`Frame`](crate::types::Frame).

use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Display form of [`Value::Missing`].
pub const MISSING: &str = "<missing>";

/// A single metadata value.
///
/// Two sentinels are part of the contract and never overlap:
/// - [`Value::Missing`] is stored when an argument list ends with a key that
///   has no value (`args!["user"]`).
/// - An absent key is reported as `None` by the lookup functions; it is never
///   represented as a `Value`.
///
/// # Examples
///
/// ```
/// use error_trail::Value;
///
/// assert_eq!(Value::from(42).to_string(), "42");
/// assert_eq!(Value::from("id").to_string(), "id");
/// assert_eq!(Value::Missing.to_string(), "<missing>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Placeholder paired with an unmatched trailing key.
    Missing,
    /// Explicit null, produced from `None`.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'static, str>),
}

impl Value {
    /// Stores the `Display` form of any value.
    #[inline]
    pub fn display<T: Display + ?Sized>(value: &T) -> Self {
        Self::Str(Cow::Owned(value.to_string()))
    }

    /// Returns the string slice if this is a [`Value::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Renders the value as a metadata key.
    pub(crate) fn into_key(self) -> String {
        match self {
            Self::Str(s) => s.into_owned(),
            other => other.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str(MISSING),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => Display::fmt(b, f),
            Self::Int(i) => Display::fmt(i, f),
            Self::UInt(u) => Display::fmt(u, f),
            Self::Float(x) => Display::fmt(x, f),
            Self::Str(s) => f.write_str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing => serializer.serialize_str(MISSING),
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::UInt(u) => serializer.serialize_u64(*u),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Str(s) => serializer.serialize_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty; $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(v: $t) -> Self {
                    Self::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64; i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64; u8, u16, u32, u64, usize);

impl From<bool> for Value {
    #[inline]
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(v: char) -> Self {
        Self::Str(Cow::Owned(v.to_string()))
    }
}

impl From<&'static str> for Value {
    #[inline]
    fn from(v: &'static str) -> Self {
        Self::Str(Cow::Borrowed(v))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Self::Str(Cow::Owned(v))
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(v: &String) -> Self {
        Self::Str(Cow::Owned(v.clone()))
    }
}

impl From<Cow<'static, str>> for Value {
    #[inline]
    fn from(v: Cow<'static, str>) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
