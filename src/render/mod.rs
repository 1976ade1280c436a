//! Log-ready renderings of a trail.
//!
//! - [`Record`]: one entry per frame, either the bare location or a
//!   single-key `{location: metadata}` object. With the `serde` feature a
//!   record list serializes to exactly that JSON shape.
//! - [`Attr`]: named attributes for structured-logging sinks. Frames map to
//!   one attribute each; [`attr`] groups them under the error's text.
//!
//! # Examples
//!
//! ```
//! use error_trail::{render::Record, Builder};
//!
//! let b = Builder::default().resolver(|_: usize, _: &'static std::panic::Location<'static>| "site".to_string());
//! let err = b.arg("a", 1).wrap(b.new_error("boom"));
//!
//! assert_eq!(
//!     err.records(),
//!     vec![
//!         Record::Location("site"),
//!         Record::Annotated { location: "site", metadata: &[("a".to_string(), 1.into())] },
//!     ]
//! );
//! ```

use crate::types::{Frame, Value};
use std::fmt::{self, Display, Write as _};

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Log entry for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record<'a> {
    /// Frame without metadata.
    Location(&'a str),
    /// Frame with metadata.
    Annotated {
        location: &'a str,
        metadata: &'a [(String, Value)],
    },
}

impl<'a> Record<'a> {
    #[inline]
    pub fn location(&self) -> &'a str {
        match self {
            Self::Location(location) | Self::Annotated { location, .. } => *location,
        }
    }
}

impl<'a> From<&'a Frame> for Record<'a> {
    fn from(frame: &'a Frame) -> Self {
        if frame.is_bare() {
            Self::Location(frame.location())
        } else {
            Self::Annotated { location: frame.location(), metadata: frame.metadata() }
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Location(location) => serializer.serialize_str(location),
            Self::Annotated { location, metadata } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(location, &MetadataMap(metadata))?;
                map.end()
            },
        }
    }
}

#[cfg(feature = "serde")]
struct MetadataMap<'a>(&'a [(String, Value)]);

#[cfg(feature = "serde")]
impl Serialize for MetadataMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::types::frame::serialize_metadata(self.0, serializer)
    }
}

/// Value of a structured-log attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Frame without metadata.
    Empty,
    Scalar(Value),
    Map(Vec<(String, Value)>),
    Group(Vec<Attr>),
}

/// A named structured-log attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

impl Attr {
    #[inline]
    pub fn new(name: impl Into<String>, value: AttrValue) -> Self {
        Self { name: name.into(), value }
    }

    /// Nested attributes of a group, empty for any other value.
    pub fn children(&self) -> &[Attr] {
        match &self.value {
            AttrValue::Group(children) => children,
            _ => &[],
        }
    }

    fn write_flat(&self, path: &str, first: &mut bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if path.is_empty() { self.name.clone() } else { format!("{path}.{}", self.name) };
        match &self.value {
            AttrValue::Empty => write_pair(f, first, &key, ""),
            AttrValue::Scalar(v) => write_pair(f, first, &key, &v.to_string()),
            AttrValue::Map(pairs) => {
                for (k, v) in pairs {
                    write_pair(f, first, &format!("{key}.{k}"), &v.to_string())?;
                }
                Ok(())
            },
            AttrValue::Group(children) => {
                for child in children {
                    child.write_flat(&key, first, f)?;
                }
                Ok(())
            },
        }
    }
}

/// logfmt-style rendering: `name=value`, nested names joined with `.`.
impl Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        self.write_flat("", &mut first, f)
    }
}

fn write_pair(f: &mut fmt::Formatter<'_>, first: &mut bool, key: &str, value: &str) -> fmt::Result {
    if !*first {
        f.write_char(' ')?;
    }
    *first = false;
    write_token(f, key)?;
    f.write_char('=')?;
    write_token(f, value)
}

fn write_token(f: &mut fmt::Formatter<'_>, token: &str) -> fmt::Result {
    let plain = !token.is_empty()
        && !token.chars().any(|c| c.is_whitespace() || c == '=' || c == '"');
    if plain {
        f.write_str(token)
    } else {
        write!(f, "{token:?}")
    }
}

#[cfg(feature = "serde")]
impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Scalar(v) => v.serialize(serializer),
            Self::Map(pairs) => crate::types::frame::serialize_metadata(pairs, serializer),
            Self::Group(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for child in children {
                    map.serialize_entry(&child.name, &child.value)?;
                }
                map.end()
            },
        }
    }
}

/// Serializes as a single-key object `{name: value}`.
#[cfg(feature = "serde")]
impl Serialize for Attr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

/// Records for `frames`, innermost first.
pub fn records(frames: &[Frame]) -> Vec<Record<'_>> {
    frames.iter().map(Record::from).collect()
}

/// One attribute per frame, named after the frame's location.
pub fn attrs(frames: &[Frame]) -> Vec<Attr> {
    frames
        .iter()
        .map(|frame| {
            let value = if frame.is_bare() {
                AttrValue::Empty
            } else {
                AttrValue::Map(frame.metadata().to_vec())
            };
            Attr::new(frame.location(), value)
        })
        .collect()
}

/// Groups the frame attributes under `message`; with no frames, a plain
/// `error` attribute holding `message`.
pub fn attr(message: &str, frames: &[Frame]) -> Attr {
    if frames.is_empty() {
        return Attr::new("error", AttrValue::Scalar(Value::from(message.to_owned())));
    }
    Attr::new(message, AttrValue::Group(attrs(frames)))
}
