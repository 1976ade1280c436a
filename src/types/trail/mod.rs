//! The annotated error value.
//!
//! A [`Trail`] owns the [`Frame`]s recorded by every wrap, innermost first,
//! and the underlying error whose display text already carries every prefix
//! and suffix applied on the way up.
//!
//! For identity purposes a trail behaves like the error it wraps:
//! [`Error::source`] hands out the original error and [`is`](crate::is)
//! walks straight through the trail.

use crate::render::{self, Attr, Record};
use crate::types::{BoxError, Frame, FrameVec, Value};
use std::error::Error;

mod lookup;
mod traits;

pub use lookup::{find, get, is, root_cause, TrailRef, MAX_DEPTH};

/// Error wrapper that stores the original error plus the frames of every
/// wrap it went through.
#[must_use]
pub struct Trail {
    pub(crate) frames: FrameVec,
    pub(crate) underlying: BoxError,
}

impl Trail {
    #[inline]
    pub(crate) fn from_parts(frames: FrameVec, underlying: BoxError) -> Self {
        Self { frames, underlying }
    }

    /// Frames in creation order: index 0 is the wrap closest to the original
    /// error, the last one is the most recent wrap.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The wrapped error, with prefixes and suffixes already composed into its
    /// display text.
    #[inline]
    pub fn underlying(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.underlying
    }

    /// Consumes the trail, returning the underlying error.
    #[inline]
    pub fn into_inner(self) -> BoxError {
        self.underlying
    }

    /// Consumes the trail, returning its frames and the underlying error.
    #[inline]
    pub fn into_parts(self) -> (FrameVec, BoxError) {
        (self.frames, self.underlying)
    }

    /// Returns the value attached under `key`.
    ///
    /// Frames are searched in creation order, so the wrap closest to the
    /// original error wins. When no frame has the key, the search continues
    /// into any other trail reachable from the underlying error.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{arg, Value};
    ///
    /// let inner = arg("k", "inner").new_error("boom");
    /// let outer = arg("k", "outer").wrap(inner);
    ///
    /// assert_eq!(outer.value("k"), Some(&Value::from("inner")));
    /// assert_eq!(outer.value("absent"), None);
    /// ```
    pub fn value(&self, key: &str) -> Option<&Value> {
        if let Some(v) = self.frames.iter().find_map(|f| f.get(key)) {
            return Some(v);
        }
        find(&*self.underlying).and_then(|inner| inner.value(key))
    }

    /// True when `target` appears anywhere in this trail's causal history.
    #[inline]
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        is(self, target)
    }

    /// Log-ready list of frames, see [`Record`].
    #[inline]
    pub fn records(&self) -> Vec<Record<'_>> {
        render::records(&self.frames)
    }

    /// Alias of [`records`](Self::records).
    #[inline]
    pub fn details(&self) -> Vec<Record<'_>> {
        self.records()
    }

    /// One attribute per frame, named after its location.
    #[inline]
    pub fn attrs(&self) -> Vec<Attr> {
        render::attrs(&self.frames)
    }

    /// All frame attributes grouped under the error's display text.
    #[inline]
    pub fn attr(&self) -> Attr {
        render::attr(&self.to_string(), &self.frames)
    }

    /// Borrowed view over this trail.
    #[inline]
    pub fn view(&self) -> TrailRef<'_> {
        TrailRef::new(Some(self), self)
    }
}
