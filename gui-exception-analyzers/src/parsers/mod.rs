//! Concrete frame parsers, one per location convention.
//!
//! - [`UnixPathParser`]: `/abs/path/File.cs:line 12`
//! - [`WindowsPathParser`]: `C:\abs\path\File.cs:line 12`
//! - [`BareFrameParser`]: `at Ns.Type.Method()` with no source location
//!
//! The two path grammars are disjoint: a Unix path may not contain `\` and
//! a Windows path may not contain `/`, so no line is accepted by both.

mod bare;
mod unix;
mod windows;

pub use bare::BareFrameParser;
pub use unix::UnixPathParser;
pub use windows::WindowsPathParser;

/// True when byte index `i` starts a whitespace-delimited token.
fn at_token_start(line: &str, i: usize) -> bool {
    line[..i].chars().next_back().is_none_or(char::is_whitespace)
}

/// Byte index of the first `/` opening a token, i.e. a Unix absolute root.
pub(crate) fn find_unix_root(line: &str) -> Option<usize> {
    line.char_indices()
        .find(|&(i, c)| c == '/' && at_token_start(line, i))
        .map(|(i, _)| i)
}

/// Byte index of the first `X:\` drive root opening a token.
pub(crate) fn find_windows_root(line: &str) -> Option<usize> {
    line.char_indices()
        .find(|&(i, c)| {
            c.is_ascii_alphabetic() && at_token_start(line, i) && line[i + 1..].starts_with(":\\")
        })
        .map(|(i, _)| i)
}
