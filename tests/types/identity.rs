use crate::at;
use error_trail::{find, get, is, root_cause, Const, Trail, MAX_DEPTH};
use std::error::Error;
use std::fmt;
use std::io;

const ROOT: Const = Const("root");

#[derive(Debug, PartialEq)]
struct Coded(u16);

impl fmt::Display for Coded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.0)
    }
}

impl Error for Coded {}

/// Application error that keeps a trail as its source.
#[derive(Debug)]
struct Service {
    inner: Trail,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("service failed")
    }
}

impl Error for Service {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

#[test]
fn wrapped_error_is_original() {
    let plain = at("a").wrap(ROOT);
    let decorated = at("a").prefix("p").suffix("s").arg("k", 1).wrap(ROOT);
    let coded = at("a").prefix("p").wrap(Coded(404));

    assert!(is(&plain, &ROOT));
    assert!(is(&decorated, &ROOT));
    assert!(is(&coded, &Coded(404)));
    assert!(!is(&coded, &Coded(500)));
}

#[test]
fn deep_chain_is_original() {
    let err = at("3").prefix("c").wrap(at("2").suffix("b").wrap(at("1").prefix("a").wrap(ROOT)));
    assert!(err.is(&ROOT));
    assert_eq!(root_cause(&err).to_string(), "root");
}

#[test]
fn trail_can_be_the_target() {
    let inner = at("1").arg("k", "v").wrap(ROOT);
    let copy = at("1").arg("k", "v").wrap(ROOT);
    let service = Service { inner };

    assert!(is(&service, &copy));
    assert!(!is(&service, &at("2").wrap(ROOT)));
}

#[test]
fn source_skips_composed_text_layer() {
    let err = at("a").prefix("outer").wrap(ROOT);
    let source = err.source().expect("trail always has a source");
    assert_eq!(source.downcast_ref::<Const>(), Some(&ROOT));
}

#[derive(Debug)]
struct Outer(Coded);

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "outer: {}", self.0)
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn source_keeps_foreign_wrappers() {
    let err = at("a").prefix("p").wrap(Outer(Coded(7)));
    let source = err.source().expect("trail always has a source");

    assert!(source.downcast_ref::<Outer>().is_some());
    assert!(is(&err, &Coded(7)));
    assert_eq!(err.to_string(), "p: outer: code 7");
}

#[test]
fn find_reaches_trail_through_foreign_error() {
    let service = Service { inner: at("inner").arg("user", 3).wrap(ROOT) };

    let found = find(&service).expect("trail is the source of service");
    assert_eq!(found.frames()[0].location(), "inner");
    assert_eq!(get(&service).frames().len(), 1);
    assert_eq!(get(&service).to_string(), "root");
}

#[test]
fn wrapping_error_that_carries_trail_continues_its_frames() {
    let service = Service { inner: at("inner").arg("k", "inner").wrap(ROOT) };
    let err = at("outer").prefix("handler").wrap(service);

    let locations: Vec<_> = err.frames().iter().map(|f| f.location()).collect();
    assert_eq!(locations, ["inner", "outer"]);
    assert_eq!(err.to_string(), "handler: service failed");
    assert!(is(&err, &ROOT));
}

#[test]
fn get_on_plain_error_is_synthetic() {
    let plain = io::Error::other("disk full");
    let view = get(&plain);

    assert!(view.trail().is_none());
    assert!(view.frames().is_empty());
    assert!(view.records().is_empty());
    assert_eq!(view.to_string(), "disk full");
}

/// Foreign error layer: either another layer or a trail below it.
#[derive(Debug)]
enum Layer {
    Next(Box<Layer>),
    Bottom(Trail),
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("layer")
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Layer::Next(next) => Some(&**next),
            Layer::Bottom(trail) => Some(trail),
        }
    }
}

/// `layers` foreign errors stacked over a trail, which sits `layers` hops
/// below the returned error.
fn layered(layers: usize) -> Layer {
    let mut layer = Layer::Bottom(at("deep").wrap(ROOT));
    for _ in 1..layers {
        layer = Layer::Next(Box::new(layer));
    }
    layer
}

#[derive(Debug)]
struct Cyclic;

impl fmt::Display for Cyclic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cyclic")
    }
}

impl Error for Cyclic {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self)
    }
}

#[test]
fn lookup_stops_at_max_depth() {
    let reachable = layered(MAX_DEPTH - 1);
    assert!(find(&reachable).is_some());
    assert!(is(&reachable, &at("deep").wrap(ROOT)));

    let too_deep = layered(MAX_DEPTH);
    assert!(find(&too_deep).is_none());
    assert!(get(&too_deep).frames().is_empty());
    assert!(!is(&too_deep, &ROOT));
    assert_eq!(root_cause(&too_deep).to_string(), "layer");
}

#[test]
fn cyclic_source_chain_terminates() {
    assert!(find(&Cyclic).is_none());
    assert!(!is(&Cyclic, &ROOT));
    assert_eq!(root_cause(&Cyclic).to_string(), "cyclic");
    assert_eq!(get(&Cyclic).to_string(), "cyclic");
}

#[test]
fn trail_targets_match_by_frames_and_text_only() {
    let io_backed = Service { inner: at("1").wrap(io::Error::other("x")) };
    let const_backed = at("1").wrap(Const("x"));

    assert!(is(&io_backed, &const_backed));
    assert!(!is(&io_backed, &Const("x")));
    assert!(io_backed.inner.source().is_some_and(|e| e.downcast_ref::<io::Error>().is_some()));
}
