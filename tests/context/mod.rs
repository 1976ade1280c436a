use error_trail::{arg, args, attr, errorf, is, new, prefix, skip, style, suffix, wrap};
use error_trail::{render::AttrValue, Const, Style, Trail, Value};

const TEST_ERROR: Const = Const("test error");

#[inline(never)]
fn func1() -> Trail {
    args(["key1", "val1"]).prefix("prepend1").suffix("append1").style(Style::Function).wrap(TEST_ERROR)
}

#[inline(never)]
fn func2() -> Trail {
    args(["key2", "val2"]).prefix("prepend2").suffix("append2").style(Style::Function).wrap(func1())
}

#[inline(never)]
fn func3() -> Trail {
    args(["key3", "val3"]).prefix("prepend3").suffix("append3").style(Style::Function).wrap(func2())
}

#[test]
fn helpers_nest_frames_and_text() {
    let err = wrap(func3());

    assert_eq!(
        err.to_string(),
        "prepend3: prepend2: prepend1: test error: append1: append2: append3"
    );
    assert_eq!(err.frames().len(), 4);
    assert!(err.frames()[0].location().ends_with("func1"), "{:?}", err.frames());
    assert!(err.frames()[1].location().ends_with("func2"), "{:?}", err.frames());
    assert!(err.frames()[2].location().ends_with("func3"), "{:?}", err.frames());
    assert!(err.frames()[3].location().starts_with("mod.rs:"), "{:?}", err.frames());
    assert_eq!(err.value("key2"), Some(&Value::from("val2")));
    assert!(is(&err, &TEST_ERROR));
}

#[test]
fn every_entry_point_records_the_same_site() {
    let s = TEST_ERROR.0;
    let (e1, e2, e3, e4, e5, e6) = (new(s), errorf(format_args!("{s}")), wrap(TEST_ERROR), skip(0).new_error(s), errorf!("{s}"), skip(0).wrap(TEST_ERROR));

    let first = e1.frames()[0].location().to_owned();
    assert!(first.starts_with("mod.rs:"), "{first}");
    for err in [&e2, &e3, &e4, &e5, &e6] {
        assert_eq!(err.frames()[0].location(), first);
        assert_eq!(err.to_string(), "test error");
    }
}

#[test]
fn constructors_start_from_default_builder() {
    assert_eq!(prefix("p").prefix_text(), "p");
    assert_eq!(suffix("s").suffix_text(), "s");
    assert_eq!(skip(4).skip_frames(), 4);
    assert_eq!(arg("k", 1).metadata()[0].1, Value::from(1));
    assert_eq!(style(Style::ShortFunction).metadata().len(), 0);
}

#[test]
fn attr_groups_frames_under_message() {
    let err = crate::at("site").arg("code", "test code").prefix("p").wrap(TEST_ERROR);
    let a = attr(&err);

    assert_eq!(a.name, "p: test error");
    assert_eq!(a.children().len(), 1);
    assert_eq!(a.children()[0].name, "site");
    assert_eq!(
        a.children()[0].value,
        AttrValue::Map(vec![("code".to_string(), Value::from("test code"))])
    );
}
