//! Ordered set of frame parsers tried until one accepts a line.
//!
//! `CompositeParser` holds every registered [`FrameParser`] in
//! priority-descending order and is itself a `FrameParser`, so callers never
//! need to know which conventions are active.

use std::sync::Arc;

use gui_exception_config::{Config, Convention, KeywordsConfig};

use crate::error::AnalyzerError;
use crate::frame::ParseOutcome;
use crate::keywords::TraceKeywords;
use crate::parsers::{BareFrameParser, UnixPathParser, WindowsPathParser};
use crate::traits::FrameParser;

/// Priority given to the built-in conventions.
pub const BUILTIN_PRIORITY: i32 = 0;

/// Tries each registered parser in order; the first `Parsed` outcome wins.
///
/// Immutable after construction and safe to share between threads.
pub struct CompositeParser {
    /// Parsers sorted by priority (highest first). Each entry is (priority, parser).
    parsers: Vec<(i32, Arc<dyn FrameParser>)>,
    unix: Option<Arc<UnixPathParser>>,
    windows: Option<Arc<WindowsPathParser>>,
    bare: Option<Arc<BareFrameParser>>,
}

impl CompositeParser {
    /// Unix then Windows conventions with the built-in keywords.
    pub fn new() -> Self {
        let keywords = TraceKeywords::default();
        let unix = Arc::new(UnixPathParser::with_keywords(keywords.clone()));
        let windows = Arc::new(WindowsPathParser::with_keywords(keywords));
        Self {
            parsers: vec![
                (BUILTIN_PRIORITY, unix.clone() as Arc<dyn FrameParser>),
                (BUILTIN_PRIORITY, windows.clone() as Arc<dyn FrameParser>),
            ],
            unix: Some(unix),
            windows: Some(windows),
            bare: None,
        }
    }

    /// Start an empty builder.
    pub fn builder() -> CompositeParserBuilder {
        CompositeParserBuilder::default()
    }

    /// Build the conventions and keywords named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, AnalyzerError> {
        Self::builder()
            .keywords(config.keywords.clone())
            .conventions(&config.conventions)
            .build()
    }

    /// The Unix convention, if registered.
    pub fn unix_parser(&self) -> Option<&UnixPathParser> {
        self.unix.as_deref()
    }

    /// The Windows convention, if registered.
    pub fn windows_parser(&self) -> Option<&WindowsPathParser> {
        self.windows.as_deref()
    }

    /// The path-less frame convention, if registered.
    pub fn bare_parser(&self) -> Option<&BareFrameParser> {
        self.bare.as_deref()
    }

    /// Names of the registered parsers in the order they are tried.
    pub fn parser_names(&self) -> Vec<&str> {
        self.parsers.iter().map(|(_, p)| p.name()).collect()
    }

    /// Number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Always false: building an empty composite is refused.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for CompositeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CompositeParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeParser")
            .field("parsers", &self.parser_names())
            .finish()
    }
}

impl FrameParser for CompositeParser {
    fn name(&self) -> &str {
        "composite"
    }

    fn try_parse(&self, line: &str) -> ParseOutcome {
        for (priority, parser) in &self.parsers {
            let outcome = parser.try_parse(line);
            if outcome.is_parsed() {
                log::trace!(
                    "composite: {} (priority={}) accepted {:?}",
                    parser.name(),
                    priority,
                    line
                );
                return outcome;
            }
        }
        log::trace!("composite: all {} parsers declined {:?}", self.parsers.len(), line);
        ParseOutcome::Declined
    }
}

/// Assembles a [`CompositeParser`] from conventions and custom parsers.
///
/// Built-in conventions are registered at [`BUILTIN_PRIORITY`] in the order
/// given. Custom parsers may use any priority; within the same priority,
/// parsers are tried in registration order.
#[derive(Default)]
pub struct CompositeParserBuilder {
    keywords: KeywordsConfig,
    conventions: Vec<Convention>,
    custom: Vec<(i32, Arc<dyn FrameParser>)>,
}

impl CompositeParserBuilder {
    /// Extra localized keywords shared by the built-in conventions.
    pub fn keywords(mut self, keywords: KeywordsConfig) -> Self {
        self.keywords = keywords;
        self
    }

    /// Enable one built-in convention. Repeats are ignored.
    pub fn convention(mut self, convention: Convention) -> Self {
        if self.conventions.contains(&convention) {
            log::warn!(
                "convention {} registered twice, keeping the first",
                convention.display_name()
            );
        } else {
            self.conventions.push(convention);
        }
        self
    }

    /// Enable several built-in conventions in order.
    pub fn conventions(self, conventions: &[Convention]) -> Self {
        conventions
            .iter()
            .fold(self, |builder, convention| builder.convention(*convention))
    }

    /// Register a custom parser at `priority` (higher = tried first).
    pub fn register(mut self, priority: i32, parser: Arc<dyn FrameParser>) -> Self {
        self.custom.push((priority, parser));
        self
    }

    /// Compile keywords and assemble the composite.
    pub fn build(self) -> Result<CompositeParser, AnalyzerError> {
        let keywords = TraceKeywords::with_extra(&self.keywords)?;
        let mut composite = CompositeParser {
            parsers: Vec::new(),
            unix: None,
            windows: None,
            bare: None,
        };

        for convention in &self.conventions {
            let parser: Arc<dyn FrameParser> = match convention {
                Convention::Unix => {
                    let parser = Arc::new(UnixPathParser::with_keywords(keywords.clone()));
                    composite.unix = Some(parser.clone());
                    parser
                }
                Convention::Windows => {
                    let parser = Arc::new(WindowsPathParser::with_keywords(keywords.clone()));
                    composite.windows = Some(parser.clone());
                    parser
                }
                Convention::Bare => {
                    let parser = Arc::new(BareFrameParser::with_keywords(keywords.clone()));
                    composite.bare = Some(parser.clone());
                    parser
                }
            };
            insert_by_priority(&mut composite.parsers, BUILTIN_PRIORITY, parser);
        }

        for (priority, parser) in self.custom {
            insert_by_priority(&mut composite.parsers, priority, parser);
        }

        if composite.parsers.is_empty() {
            return Err(AnalyzerError::EmptyParserList);
        }

        log::debug!(
            "composite parser built with {:?}",
            composite.parser_names()
        );
        Ok(composite)
    }
}

/// Maintains descending sort by priority, FIFO within equal priorities.
fn insert_by_priority(
    parsers: &mut Vec<(i32, Arc<dyn FrameParser>)>,
    priority: i32,
    parser: Arc<dyn FrameParser>,
) {
    let idx = parsers.partition_point(|(p, _)| *p >= priority);
    parsers.insert(idx, (priority, parser));
}
