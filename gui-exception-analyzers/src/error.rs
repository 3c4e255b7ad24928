//! Construction-time errors for the analyzers.
//!
//! Parsing itself never fails: a line that matches no convention is a
//! [`crate::ParseOutcome::Declined`] value. These errors only arise while
//! wiring parsers together.

/// Errors that can occur while building parsers or keyword sets.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// A composite parser was built without any frame parser registered.
    #[error("composite parser needs at least one frame parser")]
    EmptyParserList,
    /// A configured keyword cannot be matched literally.
    #[error("invalid keyword {keyword:?}: {reason}")]
    InvalidKeyword {
        /// The offending keyword as configured.
        keyword: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// A keyword pattern failed to compile.
    #[error("keyword pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}
