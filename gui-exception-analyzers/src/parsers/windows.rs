//! Frames whose source path is rooted at a Windows drive letter.

use crate::frame::{ParseOutcome, RawFrame};
use crate::keywords::TraceKeywords;
use crate::method::extract_method_name;
use crate::tail::split_trailing_location;
use crate::traits::FrameParser;

use super::find_windows_root;

/// Length of a drive root such as `C:\`.
const DRIVE_ROOT_LEN: usize = 3;

/// Parses `[prefix] X:\path\File.cs:[line|ligne] N` and `X:\path\File:`.
///
/// Mirrors [`super::UnixPathParser`]: the path runs from the drive letter to
/// the last colon. A path that is only the drive root, or that contains a
/// forward slash, is declined.
#[derive(Debug, Clone, Default)]
pub struct WindowsPathParser {
    keywords: TraceKeywords,
}

impl WindowsPathParser {
    /// Parser using the built-in keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser using the given keyword sets.
    pub fn with_keywords(keywords: TraceKeywords) -> Self {
        Self { keywords }
    }
}

impl FrameParser for WindowsPathParser {
    fn name(&self) -> &str {
        "windows"
    }

    fn try_parse(&self, line: &str) -> ParseOutcome {
        let Some(root) = find_windows_root(line) else {
            return ParseOutcome::Declined;
        };
        let Some(tail) = split_trailing_location(line, root + DRIVE_ROOT_LEN, &self.keywords)
        else {
            return ParseOutcome::Declined;
        };

        let path = line[root..tail.colon].trim_end();
        if path.len() <= DRIVE_ROOT_LEN || path.contains('/') {
            return ParseOutcome::Declined;
        }

        ParseOutcome::Parsed(RawFrame::new(
            Some(path.to_string()),
            tail.line_number,
            extract_method_name(&line[..root], &self.keywords),
        ))
    }
}
