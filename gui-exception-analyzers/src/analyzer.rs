//! Whole-trace analysis: split a block into lines and parse each one.

use gui_exception_config::Config;
use serde::Serialize;

use crate::composite::CompositeParser;
use crate::error::AnalyzerError;
use crate::frame::{ParseOutcome, RawFrame};
use crate::traits::FrameParser;

/// One input line and what the parsers made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    /// Zero-based position of the line in the analyzed block.
    pub line_index: usize,
    /// The line as it appeared, without its terminator.
    pub text: String,
    /// `Parsed` frame or `Declined`.
    pub outcome: ParseOutcome,
}

/// Ordered analysis result: exactly one entry per input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyzedTrace {
    entries: Vec<TraceEntry>,
}

impl AnalyzedTrace {
    /// Number of analyzed lines (parsed and declined).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the block contained no line at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    /// Entry for the line at `index`.
    pub fn get(&self, index: usize) -> Option<&TraceEntry> {
        self.entries.get(index)
    }

    /// Outcomes in input order, including `Declined`.
    pub fn outcomes(&self) -> impl Iterator<Item = &ParseOutcome> {
        self.entries.iter().map(|e| &e.outcome)
    }

    /// Parsed frames only, in input order.
    pub fn frames(&self) -> impl Iterator<Item = &RawFrame> {
        self.outcomes().filter_map(ParseOutcome::frame)
    }

    /// Frames that have both a path and a line number.
    pub fn navigable_frames(&self) -> impl Iterator<Item = &RawFrame> {
        self.frames().filter(|f| f.is_navigable())
    }

    /// Number of lines that produced a frame.
    pub fn parsed_count(&self) -> usize {
        self.frames().count()
    }

    /// Number of lines no parser accepted (blank lines included).
    pub fn declined_count(&self) -> usize {
        self.len() - self.parsed_count()
    }

    /// Consume into the underlying entries.
    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a AnalyzedTrace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Drives a [`CompositeParser`] over every line of a stack-trace block.
///
/// Pure and synchronous: no caching, no retries. Blank lines are recorded as
/// `Declined` without consulting any parser, so the result always lines up
/// with the input.
#[derive(Debug, Default)]
pub struct StackTraceAnalyzer {
    parser: CompositeParser,
}

impl StackTraceAnalyzer {
    /// Analyzer over the default Unix + Windows composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer over a caller-assembled composite.
    pub fn with_parser(parser: CompositeParser) -> Self {
        Self { parser }
    }

    /// Analyzer over the conventions and keywords in `config`.
    pub fn from_config(config: &Config) -> Result<Self, AnalyzerError> {
        Ok(Self::with_parser(CompositeParser::from_config(config)?))
    }

    /// The composite used for each line.
    pub fn parser(&self) -> &CompositeParser {
        &self.parser
    }

    /// Parse every line of `trace`, preserving order.
    pub fn analyze(&self, trace: &str) -> AnalyzedTrace {
        let entries: Vec<TraceEntry> = split_lines(trace)
            .into_iter()
            .enumerate()
            .map(|(line_index, text)| TraceEntry {
                line_index,
                text: text.to_string(),
                outcome: if text.trim().is_empty() {
                    ParseOutcome::Declined
                } else {
                    self.parser.try_parse(text)
                },
            })
            .collect();

        let analyzed = AnalyzedTrace { entries };
        log::debug!(
            "analyzed {} lines: {} parsed, {} declined",
            analyzed.len(),
            analyzed.parsed_count(),
            analyzed.declined_count()
        );
        analyzed
    }
}

/// Split on `\n`, `\r\n` or a lone `\r`.
///
/// Like [`str::lines`], a terminator at the very end does not produce an
/// extra empty line, and an empty input produces no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
