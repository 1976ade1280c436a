//! A single annotation point in a [`Trail`](crate::types::Trail).

use crate::types::{Metadata, Value};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// One call-site annotation: where the error was wrapped, plus the metadata
/// attached at that point.
///
/// Frames are created by the terminal operations of
/// [`Builder`](crate::types::Builder) and never change afterwards.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    #[cfg_attr(feature = "serde", serde(rename = "loc"))]
    pub(crate) location: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "args",
            skip_serializing_if = "Metadata::is_empty",
            serialize_with = "serialize_metadata"
        )
    )]
    pub(crate) metadata: Metadata,
}

impl Frame {
    #[inline]
    pub(crate) fn new(location: String, metadata: Metadata) -> Self {
        Self { location, metadata }
    }

    /// Where the error was wrapped.
    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Metadata pairs in insertion order. Keys may repeat.
    #[inline]
    pub fn metadata(&self) -> &[(String, Value)] {
        &self.metadata
    }

    /// First value stored under `key` in this frame.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// True when no metadata was attached.
    #[inline]
    pub fn is_bare(&self) -> bool {
        self.metadata.is_empty()
    }
}

/// Writes metadata as a map. A repeated key is written once, with its first
/// value, matching what [`Frame::get`] returns.
#[cfg(feature = "serde")]
pub(crate) fn serialize_metadata<S: Serializer>(
    metadata: &[(String, Value)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let first = metadata
        .iter()
        .enumerate()
        .filter(|(i, (key, _))| !metadata[..*i].iter().any(|(seen, _)| seen == key))
        .map(|(_, (key, value))| (key, value));
    serializer.collect_map(first)
}
