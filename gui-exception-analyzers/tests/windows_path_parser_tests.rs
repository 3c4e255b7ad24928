//! Grammar tests for the Windows drive-letter convention.

mod common;

use common::{accept, reject};
use gui_exception_analyzers::{CompositeParser, WindowsPathParser};

fn parser() -> WindowsPathParser {
    CompositeParser::new()
        .windows_parser()
        .expect("default composite registers the windows convention")
        .clone()
}

#[test]
fn basic_french_frame() {
    let frame = accept(
        &parser(),
        "à NUnit.UiException.TraceItem.get_Text() dans C:\\Users\\ihottier\\TraceItem.cs:ligne 43",
    );
    assert_eq!(frame.path(), Some("C:\\Users\\ihottier\\TraceItem.cs"));
    assert_eq!(frame.line_number(), Some(43));
    assert_eq!(
        frame.method_name(),
        Some("NUnit.UiException.TraceItem.get_Text()")
    );
    assert_eq!(frame.file_name(), Some("TraceItem.cs"));
}

#[test]
fn frame_declined_by_unix_grammar() {
    let frame = accept(&parser(), "à get_Text() dans C:\\Users\\ihottier\\Work\\file1:line1");
    assert_eq!(frame.path(), Some("C:\\Users\\ihottier\\Work\\file1"));
    assert_eq!(frame.line_number(), Some(1));
}

#[test]
fn lowercase_drive_letter() {
    let frame = accept(&parser(), "   at Demo.Run() in d:\\src\\Demo\\Run.cs:line 7");
    assert_eq!(frame.path(), Some("d:\\src\\Demo\\Run.cs"));
    assert_eq!(frame.line_number(), Some(7));
}

#[test]
fn spaces_and_repeated_extensions() {
    let frame = accept(
        &parser(),
        "à get_Text() dans C:\\my Document1\\my doc2.cs\\Trace Item.cs.cs:line 1",
    );
    assert_eq!(
        frame.path(),
        Some("C:\\my Document1\\my doc2.cs\\Trace Item.cs.cs")
    );
    assert_eq!(frame.file_extension().as_deref(), Some("cs"));
}

#[test]
fn trailing_colon_without_method_or_line() {
    let frame = accept(&parser(), "C:\\work\\folder\\file:");
    assert_eq!(frame.path(), Some("C:\\work\\folder\\file"));
    assert_eq!(frame.line_number(), None);
    assert_eq!(frame.method_name(), None);
}

#[test]
fn unix_paths_declined() {
    reject(&parser(), "à get_Text() dans /home/ihottier/TraceItem.cs:ligne 43");
}

#[test]
fn drive_root_alone_declined() {
    reject(&parser(), "à get_Text() dans C:\\:line 1");
    reject(&parser(), "à get_Text() dans C:\\ :line 1");
}

#[test]
fn mixed_separators_declined() {
    reject(&parser(), "à get_Text() dans C:\\work/folder\\file.cs:line 1");
}

#[test]
fn ill_formed_drive_declined() {
    reject(&parser(), "à get_Text() dans C:file.cs:line 1");
    reject(&parser(), "à get_Text() dans \\\\server\\share\\file.cs:line 1");
    reject(&parser(), "à get_Text() dans 1:\\file.cs:line 1");
}

#[test]
fn missing_tail_declined() {
    reject(&parser(), "à get_Text() dans C:\\work\\file.cs");
    reject(&parser(), "à get_Text() dans C:\\work\\file.cs:line");
}
