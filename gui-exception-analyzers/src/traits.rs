//! The frame-parser capability shared by every convention.

use crate::frame::ParseOutcome;

/// Attempts to turn one stack-trace line into a [`crate::RawFrame`].
///
/// Implementations must be `Send + Sync` and hold no mutable state, so a
/// single instance can serve many threads. `try_parse` must never panic on
/// malformed input: a line outside the grammar yields `ParseOutcome::Declined`.
pub trait FrameParser: Send + Sync {
    /// Short identifier used in logs and diagnostics (e.g. "unix").
    fn name(&self) -> &str;

    /// Parse a single line that has already been isolated from its trace.
    fn try_parse(&self, line: &str) -> ParseOutcome;
}
