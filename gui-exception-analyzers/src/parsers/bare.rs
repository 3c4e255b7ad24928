//! Frames that name a method but carry no source location.

use crate::frame::{ParseOutcome, RawFrame};
use crate::keywords::TraceKeywords;
use crate::method::extract_method_name;
use crate::traits::FrameParser;

use super::{find_unix_root, find_windows_root};

/// Parses `at Ns.Type.Method(args)` lines that have no path at all.
///
/// Typical for framework frames compiled without debug symbols. The line
/// must open with a frame marker, and is declined if it contains a path root
/// or a path marker word: such a line has a location that no registered
/// grammar understood, and reporting it as path-less would be wrong.
#[derive(Debug, Clone, Default)]
pub struct BareFrameParser {
    keywords: TraceKeywords,
}

impl BareFrameParser {
    /// Parser using the built-in keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser using the given keyword sets.
    pub fn with_keywords(keywords: TraceKeywords) -> Self {
        Self { keywords }
    }
}

impl FrameParser for BareFrameParser {
    fn name(&self) -> &str {
        "bare"
    }

    fn try_parse(&self, line: &str) -> ParseOutcome {
        let text = line.trim();
        let Some(marker) = self.keywords.leading_frame_marker().find(text) else {
            return ParseOutcome::Declined;
        };

        let signature = &text[marker.end()..];
        if signature.is_empty()
            || self.keywords.path_marker_word().is_match(signature)
            || find_unix_root(signature).is_some()
            || find_windows_root(signature).is_some()
        {
            return ParseOutcome::Declined;
        }

        extract_method_name(text, &self.keywords)
            .map(|method| RawFrame::new(None, None, Some(method)))
            .into()
    }
}
