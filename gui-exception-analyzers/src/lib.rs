//! Stack-trace analyzers for the gui-exception test runner.
//!
//! Turns the exception text of a failing test into per-frame source
//! locations the GUI can jump to. Supports:
//! - Unix absolute paths and Windows drive-letter paths
//! - Localized keywords (`at`/`à`, `in`/`dans`, `line`/`ligne`, plus configured extras)
//! - Paths with spaces, repeated extensions and extension-like folder names
//! - Path-less frames (opt-in)
//!
//! A line that matches no convention is a [`ParseOutcome::Declined`] value,
//! never an error.
//!
//! ```
//! use gui_exception_analyzers::StackTraceAnalyzer;
//!
//! let trace = "à NUnit.UiException.TraceItem.get_Text() dans /home/ihottier/TraceItem.cs:ligne 43";
//! let analyzed = StackTraceAnalyzer::new().analyze(trace);
//! let frame = analyzed.frames().next().unwrap();
//! assert_eq!(frame.path(), Some("/home/ihottier/TraceItem.cs"));
//! assert_eq!(frame.line_number(), Some(43));
//! ```

mod analyzer;
mod composite;
mod error;
mod frame;
pub mod keywords;
pub mod method;
pub mod parsers;
pub mod tail;
mod traits;

pub use analyzer::{AnalyzedTrace, StackTraceAnalyzer, TraceEntry, split_lines};
pub use composite::{BUILTIN_PRIORITY, CompositeParser, CompositeParserBuilder};
pub use error::AnalyzerError;
pub use frame::{ParseOutcome, RawFrame};
pub use keywords::TraceKeywords;
pub use parsers::{BareFrameParser, UnixPathParser, WindowsPathParser};
pub use traits::FrameParser;

// Config types consumers need to build analyzers
pub use gui_exception_config::{Convention, KeywordsConfig};
