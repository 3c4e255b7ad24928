//! End-to-end behavior of the analyzer over whole traces.

mod common;

use std::sync::Arc;

use common::MIXED_TRACE;
use gui_exception_analyzers::{
    AnalyzerError, CompositeParser, Convention, FrameParser, KeywordsConfig, ParseOutcome,
    RawFrame, StackTraceAnalyzer, UnixPathParser, WindowsPathParser,
};
use gui_exception_config::Config;

/// Lines covering every shape the built-in grammars know about, plus noise.
const CORPUS: &[&str] = &[
    "à get_Text() dans /home/ihottier/TraceItem.cs:ligne 43",
    "à get_Text() dans C:\\Users\\ihottier\\TraceItem.cs:ligne 43",
    "at X() in /srv/a b/c.cs:line 1",
    "at X() in d:\\a b\\c.cs:line 1",
    "/home/work/folder/file:",
    "C:\\work\\folder\\file:",
    "at X() in C:\\work/file.cs:line 1",
    "at X() in /work\\file.cs:line 1",
    "at X() /tmp in C:\\work\\a.cs:line 2",
    "at X() C:\\tmp in /work/a.cs:line 2",
    "//double:3",
    "à get_Text()",
    "System.NullReferenceException: Object reference not set",
    "--- End of inner exception stack trace ---",
    "",
];

// ---------------------------------------------------------------------------
// Ordering and counts
// ---------------------------------------------------------------------------

#[test]
fn one_entry_per_line_in_order() {
    let analyzed = StackTraceAnalyzer::new().analyze(MIXED_TRACE);
    assert_eq!(analyzed.len(), 6);

    for (index, entry) in analyzed.iter().enumerate() {
        assert_eq!(entry.line_index, index);
    }

    let paths: Vec<_> = analyzed.frames().filter_map(RawFrame::path).collect();
    assert_eq!(
        paths,
        vec![
            "/home/ihottier/TraceItem.cs",
            "C:\\nunit\\core\\TestMethod.cs",
            "/srv/my doc/my doc2.cs/file.cs",
        ]
    );
    assert_eq!(analyzed.parsed_count(), 3);
    assert_eq!(analyzed.declined_count(), 3);
}

#[test]
fn crlf_trace_matches_lf_trace() {
    let lf = StackTraceAnalyzer::new().analyze(MIXED_TRACE);
    let crlf = StackTraceAnalyzer::new().analyze(&MIXED_TRACE.replace('\n', "\r\n"));
    assert_eq!(lf, crlf);
}

#[test]
fn navigable_frames_skip_pathless_and_lineless() {
    let analyzer = StackTraceAnalyzer::from_config(
        &Config::new().with_conventions(vec![Convention::Unix, Convention::Bare]),
    )
    .unwrap();
    let analyzed = analyzer.analyze("at A.B()\n/home/x/y.cs:\n/home/x/z.cs:line 3");

    assert_eq!(analyzed.parsed_count(), 3);
    let navigable: Vec<_> = analyzed.navigable_frames().collect();
    assert_eq!(navigable.len(), 1);
    assert_eq!(navigable[0].path(), Some("/home/x/z.cs"));
}

// ---------------------------------------------------------------------------
// Grammar properties
// ---------------------------------------------------------------------------

#[test]
fn path_grammars_are_disjoint() {
    let unix = UnixPathParser::new();
    let windows = WindowsPathParser::new();
    for line in CORPUS {
        let both = unix.try_parse(line).is_parsed() && windows.try_parse(line).is_parsed();
        assert!(!both, "both grammars accepted {line:?}");
    }
}

#[test]
fn composite_agrees_with_first_accepting_parser() {
    let composite = CompositeParser::new();
    let unix = UnixPathParser::new();
    let windows = WindowsPathParser::new();
    for line in CORPUS {
        let expected = unix.try_parse(line).or_else(|| windows.try_parse(line));
        assert_eq!(composite.try_parse(line), expected, "line {line:?}");
    }
}

#[test]
fn pathless_lines_declined_by_path_grammars() {
    let composite = CompositeParser::new();
    for line in [
        "à get_Text()",
        "at Ns.Type.Method(String s, Int32 n)",
        "System.Exception: boom",
        "   ",
    ] {
        assert_eq!(composite.try_parse(line), ParseOutcome::Declined, "{line:?}");
    }
}

#[test]
fn accepted_frames_have_absolute_paths() {
    let composite = CompositeParser::new();
    for frame in CORPUS.iter().filter_map(|l| composite.try_parse(l).into_frame()) {
        let path = frame.path().expect("path grammars always yield a path");
        let unix_abs = path.starts_with('/') && path.len() > 1;
        let drive_abs = path.len() > 3
            && path.as_bytes()[0].is_ascii_alphabetic()
            && path[1..].starts_with(":\\");
        assert!(unix_abs || drive_abs, "not absolute: {path:?}");
    }
}

#[test]
fn overflowing_line_number_declines_frame() {
    let analyzed = StackTraceAnalyzer::new().analyze(
        "à get_Text() dans /home/a.cs:line 99999999999\n\
         à get_Text() dans C:\\work\\a.cs:line 4294967296\n\
         à get_Text() dans /home/a.cs:line 4294967295",
    );
    assert_eq!(analyzed.len(), 3);
    assert!(analyzed.get(0).unwrap().outcome.is_declined());
    assert!(analyzed.get(1).unwrap().outcome.is_declined());
    let frame = analyzed.get(2).unwrap().outcome.frame().unwrap();
    assert_eq!(frame.path(), Some("/home/a.cs"));
    assert_eq!(frame.line_number(), Some(u32::MAX));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn configured_keywords_extend_builtins() {
    let keywords = KeywordsConfig {
        frame_markers: vec!["bei".to_string()],
        path_markers: vec![],
        line_markers: vec!["Zeile".to_string()],
    };
    let analyzer =
        StackTraceAnalyzer::from_config(&Config::new().with_keywords(keywords)).unwrap();

    let analyzed = analyzer.analyze(
        "   bei Demo.Rechner.Addiere() in C:\\src\\Rechner.cs:Zeile 12\n\
         à get_Text() dans /home/ihottier/TraceItem.cs:ligne 43",
    );
    let frames: Vec<_> = analyzed.frames().collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].method_name(), Some("Demo.Rechner.Addiere()"));
    assert_eq!(frames[0].line_number(), Some(12));
    assert_eq!(frames[1].line_number(), Some(43));
}

#[test]
fn unknown_line_keyword_declined_without_config() {
    let analyzed =
        StackTraceAnalyzer::new().analyze("bei X() in C:\\src\\Rechner.cs:Zeile 12");
    assert_eq!(analyzed.parsed_count(), 0);
}

#[test]
fn invalid_configured_keyword_is_error() {
    let keywords = KeywordsConfig {
        line_markers: vec!["line:".to_string()],
        ..Default::default()
    };
    let result = CompositeParser::builder()
        .keywords(keywords)
        .convention(Convention::Unix)
        .build();
    assert!(matches!(result, Err(AnalyzerError::InvalidKeyword { .. })));
}

#[test]
fn windows_only_config_declines_unix_frames() {
    let analyzer = StackTraceAnalyzer::from_config(
        &Config::new().with_conventions(vec![Convention::Windows]),
    )
    .unwrap();
    let analyzed = analyzer.analyze(MIXED_TRACE);
    let paths: Vec<_> = analyzed.frames().filter_map(RawFrame::path).collect();
    assert_eq!(paths, vec!["C:\\nunit\\core\\TestMethod.cs"]);
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn analyzer_is_shareable_across_threads() {
    let analyzer = Arc::new(StackTraceAnalyzer::new());
    let expected = analyzer.analyze(MIXED_TRACE);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                scope.spawn(move || analyzer.analyze(MIXED_TRACE))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn composite_usable_as_trait_object() {
    let parser: Arc<dyn FrameParser> = Arc::new(CompositeParser::new());
    assert_eq!(parser.name(), "composite");
    assert!(parser.try_parse("/a/b.cs:line 2").is_parsed());
}
