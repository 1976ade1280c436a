use error_trail::location::{file_line, function, short_function};
use error_trail::traits::ResultExt;
use error_trail::{errorf, new, style, wrap, Builder, CallerResolver, Const, Style, Trail};

const ERR: Const = Const("err");

#[inline(never)]
fn helper_wraps(err: Const) -> Trail {
    let trail = style(Style::Function).skip(1).wrap(err);
    assert_eq!(trail.frames().len(), 1);
    trail
}

#[inline(never)]
fn nested_function(skip: usize) -> String {
    let name = function(skip);
    assert!(!name.is_empty());
    name
}

#[track_caller]
fn caller_helper(err: Const) -> Trail {
    Builder::default().resolver(CallerResolver).wrap(err)
}

#[test]
fn file_line_of_current_function() {
    let (loc, line) = (file_line(0), line!());
    assert_eq!(loc, format!("mod.rs:{line}"));
}

#[test]
fn function_of_current_function() {
    let name = function(0);
    assert!(name.ends_with("location::function_of_current_function"), "{name}");
    assert!(short_function(0).ends_with("function_of_current_function"));
}

#[test]
fn short_function_keeps_two_segments() {
    assert_eq!(short_function(0), "location::short_function_keeps_two_segments");
}

#[test]
fn wrapper_skip_selects_outer_frame() {
    let inner = nested_function(0);
    let outer = nested_function(1);
    assert!(inner.ends_with("location::nested_function"), "{inner}");
    assert!(outer.ends_with("wrapper_skip_selects_outer_frame"), "{outer}");
}

#[test]
fn default_builder_records_file_and_line() {
    let (err, line) = (wrap(ERR), line!());
    assert_eq!(err.frames()[0].location(), format!("mod.rs:{line}"));
}

#[test]
fn skip_attributes_helper_wraps_to_its_caller() {
    let err = helper_wraps(ERR);
    let loc = err.frames()[0].location();
    assert!(loc.ends_with("skip_attributes_helper_wraps_to_its_caller"), "{loc}");
}

#[test]
fn caller_resolver_follows_track_caller() {
    let (err, line) = (caller_helper(ERR), line!());
    assert_eq!(err.frames()[0].location(), format!("mod.rs:{line}"));
}

#[test]
fn file_line_function_style_joins_both() {
    let err = style(Style::FileLineFunction).wrap(ERR);
    let loc = err.frames()[0].location();
    assert!(loc.starts_with("mod.rs:"), "{loc}");
    assert!(loc.ends_with(" location::file_line_function_style_joins_both"), "{loc}");
}

#[test]
fn terminal_ops_report_the_calling_function() {
    let b = style(Style::Function);
    let failing: Result<(), Const> = Err(ERR);

    let trails = [
        b.wrap(ERR),
        b.new_error("boom"),
        b.errorf(format_args!("code {}", 7)),
        b.wrap_result(failing).unwrap_err(),
        b.wrap_option(Some(ERR)).unwrap(),
        failing.trail(&b).unwrap_err(),
        failing.trail_with(|| b.clone()).unwrap_err(),
    ];

    for trail in &trails {
        let loc = trail.frames()[0].location();
        assert!(loc.ends_with("location::terminal_ops_report_the_calling_function"), "{loc}");
    }
}

#[test]
fn default_entry_points_agree_on_the_line() {
    let b = Builder::default();
    let failing: Result<(), Const> = Err(ERR);

    let (trails, line) = ([b.wrap(ERR), b.wrap_result(failing).unwrap_err(), b.new_error("x"), wrap(ERR), new("x"), errorf(format_args!("x")), failing.wrap_err().unwrap_err(), failing.ctx("c").unwrap_err()], line!());

    for trail in &trails {
        assert_eq!(trail.frames()[0].location(), format!("mod.rs:{line}"));
    }
}
