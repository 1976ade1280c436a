use super::Trail;
use crate::render::{self, Attr, Record};
use crate::types::{Frame, Value};
use std::error::Error;
use std::fmt::{self, Display};

/// Upper bound on `source()` hops taken by the lookup functions.
pub const MAX_DEPTH: usize = 64;

/// Iterates `err` and its `source()` chain, at most [`MAX_DEPTH`] entries.
fn chain<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e: &&'a (dyn Error + 'static)| e.source()).take(MAX_DEPTH)
}

/// Finds the first [`Trail`] in `err` or anything reachable through its
/// `source()` chain.
///
/// # Examples
///
/// ```
/// use error_trail::{find, wrap};
///
/// let err = wrap("boom");
/// assert!(find(&err).is_some());
///
/// let plain = std::io::Error::other("plain");
/// assert!(find(&plain).is_none());
/// ```
pub fn find<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Trail> {
    chain(err).find_map(|e| e.downcast_ref::<Trail>())
}

/// Returns a view over the trail carried by `err`.
///
/// When `err` carries no trail the view has no frames and displays the error
/// itself, so callers can treat every error the same way.
///
/// ```
/// use error_trail::get;
///
/// let plain = std::io::Error::other("disk full");
/// let view = get(&plain);
/// assert!(view.frames().is_empty());
/// assert_eq!(view.to_string(), "disk full");
/// ```
pub fn get<'a>(err: &'a (dyn Error + 'static)) -> TrailRef<'a> {
    match find(err) {
        Some(trail) => TrailRef::new(Some(trail), trail),
        None => TrailRef::new(None, err),
    }
}

/// True when `target` equals `err` or any error in its `source()` chain.
///
/// Comparison is by downcast and `PartialEq`, so `target` may itself be a
/// [`Trail`]. Trails compare by frames and display text only: two trails over
/// different error types with the same message are equal. Compare against
/// the original error value when its type matters.
///
/// ```
/// use error_trail::{is, prefix, Const};
///
/// const TIMEOUT: Const = Const("timeout");
///
/// let err = prefix("fetching").wrap(TIMEOUT);
/// assert!(is(&err, &TIMEOUT));
/// assert!(!is(&err, &Const("other")));
/// ```
pub fn is<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    chain(err).any(|e| e.downcast_ref::<E>() == Some(target))
}

/// The deepest error reachable through `source()`.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    chain(err).last().unwrap_or(err)
}

/// Borrowed view returned by [`get`].
#[derive(Clone, Copy)]
pub struct TrailRef<'a> {
    trail: Option<&'a Trail>,
    error: &'a (dyn Error + 'static),
}

impl<'a> TrailRef<'a> {
    #[inline]
    pub(crate) fn new(trail: Option<&'a Trail>, error: &'a (dyn Error + 'static)) -> Self {
        Self { trail, error }
    }

    /// The trail found, if any.
    #[inline]
    pub fn trail(&self) -> Option<&'a Trail> {
        self.trail
    }

    /// The error this view displays.
    #[inline]
    pub fn error(&self) -> &'a (dyn Error + 'static) {
        self.error
    }

    #[inline]
    pub fn frames(&self) -> &'a [Frame] {
        match self.trail {
            Some(trail) => trail.frames(),
            None => &[],
        }
    }

    #[inline]
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.trail.and_then(|t| t.value(key))
    }

    #[inline]
    pub fn records(&self) -> Vec<Record<'a>> {
        render::records(self.frames())
    }

    #[inline]
    pub fn attrs(&self) -> Vec<Attr> {
        render::attrs(self.frames())
    }

    /// Grouped attribute, or a plain `error` string attribute when there are
    /// no frames.
    #[inline]
    pub fn attr(&self) -> Attr {
        render::attr(&self.error.to_string(), self.frames())
    }
}

impl Display for TrailRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.error, f)
    }
}

impl fmt::Debug for TrailRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailRef")
            .field("error", &self.error.to_string())
            .field("frames", &self.frames())
            .finish()
    }
}
