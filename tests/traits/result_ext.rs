use crate::at;
use error_trail::traits::ResultExt;
use error_trail::{is, Builder, Const, Trail, Value};
use std::cell::Cell;

const DENIED: Const = Const("denied");

fn failing() -> Result<u8, Const> {
    Err(DENIED)
}

#[test]
fn trail_applies_builder_on_error() {
    let err = failing().trail(&at("site").prefix("open").arg("path", "/tmp/x")).unwrap_err();

    assert_eq!(err.to_string(), "open: denied");
    assert_eq!(err.value("path"), Some(&Value::from("/tmp/x")));
    assert!(is(&err, &DENIED));
}

#[test]
fn ok_passes_through_untouched() {
    let built = Cell::new(false);
    let ok: Result<u8, Const> = Ok(1);

    assert_eq!(ok.trail(&Builder::default()).ok(), Some(1));
    assert_eq!(
        ok.trail_with(|| {
            built.set(true);
            Builder::default()
        })
        .ok(),
        Some(1)
    );
    assert!(!built.get());
}

#[test]
fn trail_with_builds_lazily_on_error() {
    let err = failing().trail_with(|| at("lazy").suffix("late")).unwrap_err();
    assert_eq!(err.to_string(), "denied: late");
    assert_eq!(err.frames()[0].location(), "lazy");
}

#[test]
fn ctx_prefixes_message() {
    let err = failing().ctx("loading").unwrap_err();
    assert_eq!(err.to_string(), "loading: denied");
    assert!(err.frames()[0].location().starts_with("result_ext.rs:"));
}

#[test]
fn wrap_err_chains_onto_existing_trail() {
    fn inner() -> Result<(), Trail> {
        failing().map(|_| ()).trail(&at("inner"))
    }

    let err = inner().wrap_err().unwrap_err();
    assert_eq!(err.frames().len(), 2);
    assert_eq!(err.frames()[0].location(), "inner");
    assert_eq!(err.to_string(), "denied");
}
