use crate::at;
use error_trail::render::{Attr, AttrValue, Record};
use error_trail::{get, Const, Value};

const BOOM: Const = Const("boom");

#[test]
fn records_follow_frame_order() {
    let err = at("loc2").wrap(at("loc1").arg("a", 1).wrap(BOOM));

    assert_eq!(
        err.records(),
        vec![
            Record::Annotated { location: "loc1", metadata: &[("a".to_string(), Value::from(1))] },
            Record::Location("loc2"),
        ]
    );
    assert_eq!(err.details(), err.records());
}

#[test]
fn attrs_one_per_frame() {
    let err = at("b").wrap(at("a").arg("k", "v").wrap(BOOM));

    assert_eq!(
        err.attrs(),
        vec![
            Attr::new("a", AttrValue::Map(vec![("k".to_string(), Value::from("v"))])),
            Attr::new("b", AttrValue::Empty),
        ]
    );
}

#[test]
fn attr_falls_back_to_error_string_without_frames() {
    let plain = std::io::Error::other("disk full");
    let attr = get(&plain).attr();

    assert_eq!(attr, Attr::new("error", AttrValue::Scalar(Value::from("disk full"))));
}

#[test]
fn grouped_attr_displays_logfmt() {
    let err = at("svc.rs:9").arg("user id", 5).prefix("load").wrap(BOOM);
    assert_eq!(err.attr().to_string(), r#""load: boom.svc.rs:9.user id"=5"#);
}
