//! Builder protocol for annotating errors.
//!
//! A [`Builder`] collects everything a wrap should attach (skip count,
//! prefix, suffix, metadata) and commits it only when a terminal operation
//! such as [`Builder::wrap`] runs. Every configuration method returns a new
//! builder, so a partially configured builder can be shared and reused.

use crate::location::{keep_frame, CallerResolver, Resolver, StackResolver, Style, UNKNOWN};
use crate::types::composed::Composed;
use crate::types::{find, BoxError, Frame, FrameVec, Metadata, Trail, Value};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Frames between the resolver's caller and the code calling a terminal
/// operation: the private annotate step and the terminal operation itself.
pub const INTERNAL_OFFSET: usize = 2;

/// Immutable accumulator of annotation context.
///
/// # Examples
///
/// ```
/// use error_trail::{Builder, CallerResolver};
///
/// let base = Builder::default().resolver(CallerResolver).prefix("db");
///
/// let a = base.suffix("primary").new_error("timeout");
/// let b = base.suffix("replica").new_error("timeout");
///
/// assert_eq!(a.to_string(), "db: timeout: primary");
/// assert_eq!(b.to_string(), "db: timeout: replica");
/// ```
#[derive(Clone, Default)]
#[must_use]
pub struct Builder {
    skip: usize,
    prefix: String,
    suffix: String,
    args: Metadata,
    resolver: Option<Arc<dyn Resolver>>,
}

impl Builder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips `skip` extra stack frames when resolving the call site.
    ///
    /// Helpers that wrap errors on behalf of their caller pass their own
    /// skip count plus one. A non-zero count switches the default resolver
    /// from the `#[track_caller]` site to a [`StackResolver`] walk, so every
    /// skipped helper must keep its frame: `#[inline(never)]`, and not
    /// returning the wrapped error as its last call. `#[track_caller]`
    /// helpers with a zero skip count need neither.
    pub fn skip(&self, skip: usize) -> Self {
        Self { skip, ..self.clone() }
    }

    /// Adds text in front of the error message.
    ///
    /// Text added later is placed before text added earlier, the same order
    /// nested wraps produce: `prefix("a").prefix("b")` renders `b: a: msg`.
    pub fn prefix(&self, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut next = self.clone();
        if text.is_empty() {
            return next;
        }
        next.prefix = if next.prefix.is_empty() {
            text
        } else {
            format!("{text}: {}", next.prefix)
        };
        next
    }

    /// Adds text after the error message. Text added later goes last.
    pub fn suffix(&self, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut next = self.clone();
        if text.is_empty() {
            return next;
        }
        if !next.suffix.is_empty() {
            next.suffix.push_str(": ");
        }
        next.suffix.push_str(&text);
        next
    }

    /// Appends metadata from a flat `key, value, key, value, ...` list.
    ///
    /// Keys are converted to their display form. A trailing key without a
    /// value is paired with [`Value::Missing`]. Existing pairs are kept, even
    /// when a key repeats.
    ///
    /// ```
    /// use error_trail::{args, Builder, Value};
    ///
    /// let b = Builder::default().args(args!["user", 7, 404, "status", "dangling"]);
    /// assert_eq!(
    ///     b.metadata(),
    ///     &[
    ///         ("user".to_string(), Value::from(7)),
    ///         ("404".to_string(), Value::from("status")),
    ///         ("dangling".to_string(), Value::Missing),
    ///     ]
    /// );
    /// ```
    pub fn args<I, V>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut next = self.clone();
        let mut items = items.into_iter().map(Into::into);
        while let Some(key) = items.next() {
            let value = items.next().unwrap_or(Value::Missing);
            next.args.push((key.into_key(), value));
        }
        next
    }

    /// Appends a single metadata pair.
    pub fn arg(&self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        let mut next = self.clone();
        next.args.push((key.into().into_key(), value.into()));
        next
    }

    /// Uses `resolver` to compute call-site locations.
    pub fn resolver(&self, resolver: impl Resolver + 'static) -> Self {
        Self { resolver: Some(Arc::new(resolver)), ..self.clone() }
    }

    /// Uses a [`StackResolver`] with the given rendering style.
    pub fn style(&self, style: Style) -> Self {
        self.resolver(StackResolver::new(style))
    }

    #[inline]
    pub fn skip_frames(&self) -> usize {
        self.skip
    }

    #[inline]
    pub fn prefix_text(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn suffix_text(&self) -> &str {
        &self.suffix
    }

    #[inline]
    pub fn metadata(&self) -> &[(String, Value)] {
        &self.args
    }

    /// Annotates `err`, recording the caller's location.
    ///
    /// If `err` is, or carries, a [`Trail`], the new frame is appended to its
    /// frames. Otherwise a new single-frame trail starts.
    #[track_caller]
    #[inline(never)]
    pub fn wrap<E>(&self, err: E) -> Trail
    where
        E: Into<BoxError>,
    {
        keep_frame(self.annotate(err.into(), Location::caller()))
    }

    /// Like [`wrap`](Self::wrap), but `None` stays `None` and nothing is
    /// recorded.
    #[track_caller]
    #[inline(never)]
    pub fn wrap_option<E>(&self, err: Option<E>) -> Option<Trail>
    where
        E: Into<BoxError>,
    {
        let err = err?;
        Some(keep_frame(self.annotate(err.into(), Location::caller())))
    }

    /// Annotates the error of a `Result`; `Ok` passes through untouched.
    #[track_caller]
    #[inline(never)]
    pub fn wrap_result<T, E>(&self, result: Result<T, E>) -> Result<T, Trail>
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(v) => Ok(v),
            Err(e) => Err(keep_frame(self.annotate(e.into(), Location::caller()))),
        }
    }

    /// Creates a new error with `message` and annotates it.
    #[track_caller]
    #[inline(never)]
    pub fn new_error(&self, message: impl Into<String>) -> Trail {
        let err: BoxError = message.into().into();
        keep_frame(self.annotate(err, Location::caller()))
    }

    /// Creates a new error from format arguments and annotates it.
    ///
    /// Usually reached through the [`errorf!`](macro@crate::errorf) macro.
    #[track_caller]
    #[inline(never)]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Trail {
        let err: BoxError = fmt::format(args).into();
        keep_frame(self.annotate(err, Location::caller()))
    }

    /// Shared body of every terminal operation. Must be called directly by
    /// them, outside tail position, so that [`INTERNAL_OFFSET`] holds.
    #[inline(never)]
    pub(crate) fn annotate(&self, err: BoxError, caller: &'static Location<'static>) -> Trail {
        let skip = self.skip + INTERNAL_OFFSET;
        let location = match &self.resolver {
            Some(resolver) => resolver.resolve(skip, caller),
            None if self.skip == 0 => CallerResolver.resolve(skip, caller),
            None => StackResolver::default().resolve(skip, caller),
        };
        let location = if location.is_empty() { UNKNOWN.to_owned() } else { location };
        let frame = Frame::new(location, self.args.clone());

        let (mut frames, underlying) = match err.downcast::<Trail>() {
            Ok(trail) => trail.into_parts(),
            Err(err) => {
                let frames: FrameVec = find(&*err).map(|t| t.frames.clone()).unwrap_or_default();
                (frames, err)
            },
        };
        frames.push(frame);

        Trail::from_parts(frames, Composed::compose(underlying, &self.prefix, &self.suffix))
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("skip", &self.skip)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("args", &self.args)
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}
