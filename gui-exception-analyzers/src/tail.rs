//! The convention-independent end of a frame: `:line N`, `:ligne N`, `:N` or a bare `:`.
//!
//! Both path conventions delimit their path by searching for this tail, so
//! the rules live here once.

use crate::keywords::TraceKeywords;

/// Where the path ends and which line number followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingLocation {
    /// Byte index of the colon that terminates the path.
    pub colon: usize,
    /// The number after the colon, absent for a bare trailing `:`.
    pub line_number: Option<u32>,
}

/// Find the location tail of `line`, looking for its colon at or after `from`.
///
/// Only the last colon can start a tail (the tail grammar admits no colon),
/// which is what makes the path greedy: dots, spaces and extension-like
/// folder names before it all belong to the path. Returns `None` when there
/// is no colon, when the text after it is not a tail, or when the number
/// does not fit in a `u32`.
pub fn split_trailing_location(
    line: &str,
    from: usize,
    keywords: &TraceKeywords,
) -> Option<TrailingLocation> {
    let colon = from + line.get(from..)?.rfind(':')?;
    let caps = keywords.tail().captures(&line[colon + 1..])?;
    let line_number = match caps.get(1) {
        Some(digits) => Some(digits.as_str().parse::<u32>().ok()?),
        None => None,
    };
    Some(TrailingLocation { colon, line_number })
}
