//! Frames whose source path is an absolute Unix path.

use crate::frame::{ParseOutcome, RawFrame};
use crate::keywords::TraceKeywords;
use crate::method::extract_method_name;
use crate::tail::split_trailing_location;
use crate::traits::FrameParser;

use super::find_unix_root;

/// Parses `[prefix] /abs/path:[line|ligne] N` and `/abs/path:`.
///
/// The path starts at the first `/` opening a token and runs to the last
/// colon of the line, so spaces, repeated extensions and folders named like
/// files (`my doc2.cs/`) stay inside it. A path that is only `/`, or that
/// contains a backslash, is declined.
///
/// The text before the path is not checked for frame keywords. A message
/// line such as `IOException: cannot open /etc/app.conf: 3` fits the
/// grammar and is returned as a frame whose method is the message prose.
#[derive(Debug, Clone, Default)]
pub struct UnixPathParser {
    keywords: TraceKeywords,
}

impl UnixPathParser {
    /// Parser using the built-in keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser using the given keyword sets.
    pub fn with_keywords(keywords: TraceKeywords) -> Self {
        Self { keywords }
    }
}

impl FrameParser for UnixPathParser {
    fn name(&self) -> &str {
        "unix"
    }

    fn try_parse(&self, line: &str) -> ParseOutcome {
        let Some(root) = find_unix_root(line) else {
            return ParseOutcome::Declined;
        };
        let Some(tail) = split_trailing_location(line, root + 1, &self.keywords) else {
            return ParseOutcome::Declined;
        };

        let path = line[root..tail.colon].trim_end();
        if path == "/" || path.contains('\\') {
            return ParseOutcome::Declined;
        }

        ParseOutcome::Parsed(RawFrame::new(
            Some(path.to_string()),
            tail.line_number,
            extract_method_name(&line[..root], &self.keywords),
        ))
    }
}
