//! Call-site resolution.
//!
//! A [`Resolver`] turns "how many frames to skip" into a human-readable
//! location string. The builder calls it exactly once per terminal
//! operation, while the stack still has the shape of the call site.
//!
//! Two resolvers ship with the crate:
//!
//! - [`CallerResolver`] reports the `#[track_caller]` site of the terminal
//!   operation. It ignores the skip count; helper layers propagate the site
//!   by being `#[track_caller]` themselves. A builder without a custom
//!   resolver uses it while the skip count is zero.
//! - [`StackResolver`] walks the real call stack with the `backtrace` crate
//!   and honors the skip count. A builder without a custom resolver falls
//!   back to it once a skip count is set.
//!
//! Frames counted by [`StackResolver`] must still be on the stack when it
//! runs: a helper that is inlined, or that returns the terminal operation's
//! result as a tail call, does not count as a frame in optimized builds.

use backtrace::Backtrace;
use std::ffi::c_void;
use std::fmt::Debug;
use std::hint;
use std::panic::Location;
use std::path::Path;

/// Returned when the stack is exhausted or carries no symbol information.
pub const UNKNOWN: &str = "unknown";

/// Maps a skip count to a location string.
///
/// `skip` counts frames above the resolver's own caller: `0` is the function
/// that called [`resolve`](Resolver::resolve). `caller` is the
/// `#[track_caller]` site of the terminal operation that triggered the call.
///
/// Closures with the same signature implement the trait:
///
/// ```
/// use error_trail::Builder;
///
/// let err = Builder::default()
///     .resolver(|_skip: usize, _caller: &'static std::panic::Location<'static>| "here".to_string())
///     .new_error("boom");
/// assert_eq!(err.frames()[0].location(), "here");
/// ```
pub trait Resolver: Send + Sync {
    fn resolve(&self, skip: usize, caller: &'static Location<'static>) -> String;
}

impl<F> Resolver for F
where
    F: Fn(usize, &'static Location<'static>) -> String + Send + Sync,
{
    #[inline]
    fn resolve(&self, skip: usize, caller: &'static Location<'static>) -> String {
        self(skip, caller)
    }
}

/// How a resolved frame is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// `lib.rs:42`
    #[default]
    FileLine,
    /// `my_crate::module::function`
    Function,
    /// `module::function`
    ShortFunction,
    /// `lib.rs:42 module::function`
    FileLineFunction,
}

/// Resolver backed by a live stack walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackResolver {
    style: Style,
}

impl StackResolver {
    #[inline]
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }
}

impl Resolver for StackResolver {
    #[inline(never)]
    fn resolve(&self, skip: usize, _caller: &'static Location<'static>) -> String {
        // frames()[0] is this function once the backtrace trims its own internals
        let trace = Backtrace::new_unresolved();
        match trace.frames().get(skip + 1) {
            Some(frame) => describe(frame.ip(), self.style),
            None => UNKNOWN.to_owned(),
        }
    }
}

/// Resolver that reports the `#[track_caller]` site as `file:line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallerResolver;

impl Resolver for CallerResolver {
    #[inline]
    fn resolve(&self, _skip: usize, caller: &'static Location<'static>) -> String {
        format!("{}:{}", base_name(caller.file()), caller.line())
    }
}

/// `file:line` of the frame `skip` levels above the caller of this function.
///
/// ```
/// let here = error_trail::location::file_line(0);
/// assert!(!here.is_empty());
/// ```
#[inline(never)]
pub fn file_line(skip: usize) -> String {
    keep_frame(StackResolver::new(Style::FileLine).resolve(skip + 1, Location::caller()))
}

/// Full function path of the frame `skip` levels above the caller.
#[inline(never)]
pub fn function(skip: usize) -> String {
    keep_frame(StackResolver::new(Style::Function).resolve(skip + 1, Location::caller()))
}

/// Last two path segments of the function `skip` levels above the caller.
#[inline(never)]
pub fn short_function(skip: usize) -> String {
    keep_frame(StackResolver::new(Style::ShortFunction).resolve(skip + 1, Location::caller()))
}

/// Returns `value` behind an optimization barrier, so the call producing it
/// is never compiled as a tail call and the calling frame stays on the stack.
#[inline]
pub(crate) fn keep_frame<T>(value: T) -> T {
    hint::black_box(&value);
    value
}

fn describe(ip: *mut c_void, style: Style) -> String {
    let mut file_line = None;
    let mut name = None;

    // ip is a return address; step back into the call instruction
    let addr = (ip as usize).saturating_sub(1) as *mut c_void;
    backtrace::resolve(addr, |symbol| {
        if name.is_some() || file_line.is_some() {
            return;
        }
        if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
            file_line = Some(format!("{}:{}", base_name_path(file), line));
        }
        name = symbol.name().map(|n| format!("{n:#}"));
    });

    let rendered = match style {
        Style::FileLine => file_line.or(name),
        Style::Function => name,
        Style::ShortFunction => name.map(|n| short_name(&n).to_owned()),
        Style::FileLineFunction => match (file_line, name) {
            (Some(fl), Some(n)) => Some(format!("{fl} {}", short_name(&n))),
            (fl, n) => fl.or(n),
        },
    };
    rendered.unwrap_or_else(|| UNKNOWN.to_owned())
}

fn base_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

fn base_name_path(file: &Path) -> String {
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}

/// Keeps the last two `::` segments: `a::b::f::{{closure}}` reads
/// `f::{{closure}}`.
fn short_name(full: &str) -> &str {
    let mut cut = full.len();
    for _ in 0..2 {
        match full[..cut].rfind("::") {
            Some(i) => cut = i,
            None => return full,
        }
    }
    &full[cut + 2..]
}
