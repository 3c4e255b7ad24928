//! Rendering of an analyzed trace for the terminal or for tools.
//!
//! The text form has one row per input line:
//!
//! ```text
//! #1  /home/ihottier/TraceItem.cs:43  NUnit.UiException.TraceItem.get_Text()
//! -   <declined>  System.Exception: boom
//! ```
//!
//! The JSON form is the serialized list of entries.

use gui_exception_analyzers::{AnalyzedTrace, ParseOutcome, RawFrame, TraceEntry};

/// Output format of `gui-exception analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Aligned human-readable rows
    #[default]
    Text,
    /// Pretty-printed JSON array of entries
    Json,
}

/// What to render and how.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Only keep frames that have both a path and a line number
    pub navigable_only: bool,
}

/// Render `trace` according to `options`. The result ends with a newline.
pub fn render(trace: &AnalyzedTrace, options: &ReportOptions) -> serde_json::Result<String> {
    let entries = selected_entries(trace, options.navigable_only);
    match options.format {
        ReportFormat::Text => Ok(render_text(&entries)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&entries)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn selected_entries(trace: &AnalyzedTrace, navigable_only: bool) -> Vec<&TraceEntry> {
    trace
        .iter()
        .filter(|entry| {
            !navigable_only || entry.outcome.frame().is_some_and(RawFrame::is_navigable)
        })
        .collect()
}

fn render_text(entries: &[&TraceEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let row = match &entry.outcome {
            ParseOutcome::Parsed(frame) => format!(
                "#{:<3} {}  {}",
                entry.line_index,
                location(frame),
                frame.method_name().unwrap_or_default()
            ),
            ParseOutcome::Declined => format!("-    <declined>  {}", entry.text.trim()),
        };
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// `path:line`, `path`, or a placeholder for path-less frames.
pub fn location(frame: &RawFrame) -> String {
    match (frame.path(), frame.line_number()) {
        (Some(path), Some(line)) => format!("{path}:{line}"),
        (Some(path), None) => path.to_string(),
        (None, _) => "<no source>".to_string(),
    }
}
