//! Shared assertions for frame-parser test suites.

#![allow(dead_code)]

use gui_exception_analyzers::{FrameParser, ParseOutcome, RawFrame};

/// Assert that `parser` accepts `line` and return the frame.
///
/// Parses twice to check the parser is deterministic.
pub fn accept(parser: &dyn FrameParser, line: &str) -> RawFrame {
    let first = parser.try_parse(line);
    let second = parser.try_parse(line);
    assert_eq!(first, second, "{} is not deterministic on {line:?}", parser.name());
    match first {
        ParseOutcome::Parsed(frame) => frame,
        ParseOutcome::Declined => panic!("{} should accept {line:?}", parser.name()),
    }
}

/// Assert that `parser` declines `line`.
pub fn reject(parser: &dyn FrameParser, line: &str) {
    let outcome = parser.try_parse(line);
    assert!(
        outcome.is_declined(),
        "{} should decline {line:?}, got {outcome:?}",
        parser.name()
    );
}

/// A multi-convention trace as a French .NET runtime prints it.
pub const MIXED_TRACE: &str = "System.Exception: boom\n\
   à NUnit.UiException.TraceItem.get_Text() dans /home/ihottier/TraceItem.cs:ligne 43\n\
   à NUnit.Core.TestMethod.Run() dans C:\\nunit\\core\\TestMethod.cs:ligne 120\n\
   à System.RuntimeMethodHandle.InvokeMethod()\n\
\n\
   à Demo.Tests.Run() dans /srv/my doc/my doc2.cs/file.cs:line 1";
