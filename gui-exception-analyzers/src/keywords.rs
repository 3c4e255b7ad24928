//! Localized trace keywords and the patterns compiled from them.
//!
//! Runtimes print frames like `at Ns.Type.Method() in /src/File.cs:line 12`,
//! with the three marker words translated per locale (`à ... dans ...:ligne 12`).
//! The accepted words form small closed sets; configuration may append to
//! them but never removes the built-ins.

use std::sync::OnceLock;

use gui_exception_config::{KeywordsConfig, keyword_problem};
use regex::Regex;

use crate::error::AnalyzerError;

/// Built-in words introducing a frame.
pub const FRAME_MARKERS: &[&str] = &["at", "à"];
/// Built-in words separating the method from the path.
pub const PATH_MARKERS: &[&str] = &["in", "dans"];
/// Built-in words preceding a line number.
pub const LINE_MARKERS: &[&str] = &["line", "ligne"];

/// Keyword sets plus the patterns derived from them.
#[derive(Debug, Clone)]
pub struct TraceKeywords {
    frame_markers: Vec<String>,
    path_markers: Vec<String>,
    line_markers: Vec<String>,
    /// Text after the path's trailing colon: nothing, or `[keyword] digits`.
    tail: Regex,
    /// Frame marker at the start of a (trimmed) line.
    leading_frame_marker: Regex,
    /// Path marker closing the method prefix.
    trailing_path_marker: Regex,
    /// Path marker anywhere as a whole word.
    path_marker_word: Regex,
    /// Mono IL offset such as `[0x00012]` after the method signature.
    il_offset: Regex,
}

impl TraceKeywords {
    /// Built-in keywords extended with the configured extras.
    pub fn with_extra(extra: &KeywordsConfig) -> Result<Self, AnalyzerError> {
        Self::build(
            merge(FRAME_MARKERS, &extra.frame_markers)?,
            merge(PATH_MARKERS, &extra.path_markers)?,
            merge(LINE_MARKERS, &extra.line_markers)?,
        )
    }

    fn build(
        frame_markers: Vec<String>,
        path_markers: Vec<String>,
        line_markers: Vec<String>,
    ) -> Result<Self, AnalyzerError> {
        let frame_alt = alternation(&frame_markers);
        let path_alt = alternation(&path_markers);
        let line_alt = alternation(&line_markers);

        Ok(Self {
            tail: Regex::new(&format!(
                r"(?i)^\s*(?:(?:(?:{line_alt})\s*)?([0-9]+)\s*)?$"
            ))?,
            leading_frame_marker: Regex::new(&format!(r"(?i)^(?:{frame_alt})(?:\s+|$)"))?,
            trailing_path_marker: Regex::new(&format!(r"(?i)(?:^|\s+)(?:{path_alt})$"))?,
            path_marker_word: Regex::new(&format!(r"(?i)(?:^|\s)(?:{path_alt})(?:\s|$)"))?,
            il_offset: Regex::new(r"\s*\[0x[0-9a-fA-F]+\]$")?,
            frame_markers,
            path_markers,
            line_markers,
        })
    }

    /// Words introducing a frame (`at`, `à`, ...).
    pub fn frame_markers(&self) -> &[String] {
        &self.frame_markers
    }

    /// Words separating method and path (`in`, `dans`, ...).
    pub fn path_markers(&self) -> &[String] {
        &self.path_markers
    }

    /// Words preceding a line number (`line`, `ligne`, ...).
    pub fn line_markers(&self) -> &[String] {
        &self.line_markers
    }

    pub(crate) fn tail(&self) -> &Regex {
        &self.tail
    }

    pub(crate) fn leading_frame_marker(&self) -> &Regex {
        &self.leading_frame_marker
    }

    pub(crate) fn trailing_path_marker(&self) -> &Regex {
        &self.trailing_path_marker
    }

    pub(crate) fn path_marker_word(&self) -> &Regex {
        &self.path_marker_word
    }

    pub(crate) fn il_offset(&self) -> &Regex {
        &self.il_offset
    }
}

impl Default for TraceKeywords {
    /// Built-in English and French keywords only.
    fn default() -> Self {
        static BUILTIN: OnceLock<TraceKeywords> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                TraceKeywords::with_extra(&KeywordsConfig::default())
                    .expect("built-in keyword patterns are valid and should always compile")
            })
            .clone()
    }
}

/// Built-ins followed by validated, de-duplicated extras.
fn merge(builtin: &[&str], extra: &[String]) -> Result<Vec<String>, AnalyzerError> {
    let mut words: Vec<String> = builtin.iter().map(|w| w.to_string()).collect();
    for word in extra {
        if let Some(reason) = keyword_problem(word) {
            return Err(AnalyzerError::InvalidKeyword {
                keyword: word.clone(),
                reason,
            });
        }
        if !words.iter().any(|w| w.to_lowercase() == word.to_lowercase()) {
            words.push(word.clone());
        }
    }
    Ok(words)
}

/// Regex alternation of escaped words, longest first.
fn alternation(words: &[String]) -> String {
    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    sorted
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}
