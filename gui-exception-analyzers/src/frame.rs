//! Parse results: [`RawFrame`] and [`ParseOutcome`].

use serde::Serialize;

/// Source location extracted from one stack-trace line.
///
/// Values are immutable once built. `path`, when present, is exactly the text
/// the accepting grammar delimited: separators are never converted between
/// conventions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RawFrame {
    path: Option<String>,
    line_number: Option<u32>,
    method_name: Option<String>,
}

impl RawFrame {
    /// Build a frame. Intended for [`crate::FrameParser`] implementations.
    pub fn new(path: Option<String>, line_number: Option<u32>, method_name: Option<String>) -> Self {
        Self {
            path,
            line_number,
            method_name,
        }
    }

    /// Absolute source path, `None` for frames without a source location.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Line number from the `:line N` tail, if there was one.
    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    /// Method signature preceding the path, e.g. `NUnit.UiException.TraceItem.get_Text()`.
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// Whether the frame carries enough to jump to a source line.
    pub fn is_navigable(&self) -> bool {
        self.path.is_some() && self.line_number.is_some()
    }

    /// Last path segment, split on either separator.
    pub fn file_name(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(|p| p.rsplit(['/', '\\']).next())
            .filter(|name| !name.is_empty())
    }

    /// Lower-cased extension of [`Self::file_name`] (`"cs"` for `Item.cs.cs`).
    pub fn file_extension(&self) -> Option<String> {
        self.file_name()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(str::to_ascii_lowercase)
    }

    /// Method name without namespace, class or argument list (`get_Text`).
    pub fn base_method_name(&self) -> Option<&str> {
        let qualified = self.qualified_method()?;
        let base = qualified
            .rsplit_once('.')
            .map_or(qualified, |(_, method)| method);
        (!base.is_empty()).then_some(base)
    }

    /// Declaring class without namespace (`TraceItem`).
    pub fn class_name(&self) -> Option<&str> {
        let (owner, _) = self.qualified_method()?.rsplit_once('.')?;
        let class = owner.rsplit_once('.').map_or(owner, |(_, class)| class);
        (!class.is_empty()).then_some(class)
    }

    /// The dotted method name with any argument list removed.
    fn qualified_method(&self) -> Option<&str> {
        let method = self.method_name.as_deref()?;
        let qualified = method.split_once('(').map_or(method, |(head, _)| head).trim_end();
        (!qualified.is_empty()).then_some(qualified)
    }
}

/// Result of offering one line to a parser.
///
/// `Declined` means "this grammar does not describe the line"; it is an
/// ordinary value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "frame", rename_all = "lowercase")]
pub enum ParseOutcome {
    /// The line matched and produced a frame.
    Parsed(RawFrame),
    /// The line does not match.
    Declined,
}

impl ParseOutcome {
    /// True for `Parsed`.
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    /// True for `Declined`.
    pub fn is_declined(&self) -> bool {
        matches!(self, ParseOutcome::Declined)
    }

    /// Borrow the frame of a `Parsed` outcome.
    pub fn frame(&self) -> Option<&RawFrame> {
        match self {
            ParseOutcome::Parsed(frame) => Some(frame),
            ParseOutcome::Declined => None,
        }
    }

    /// Take the frame of a `Parsed` outcome.
    pub fn into_frame(self) -> Option<RawFrame> {
        match self {
            ParseOutcome::Parsed(frame) => Some(frame),
            ParseOutcome::Declined => None,
        }
    }

    /// Keep a `Parsed` outcome, otherwise evaluate `f`.
    pub fn or_else<F: FnOnce() -> ParseOutcome>(self, f: F) -> ParseOutcome {
        match self {
            ParseOutcome::Parsed(_) => self,
            ParseOutcome::Declined => f(),
        }
    }
}

impl From<Option<RawFrame>> for ParseOutcome {
    fn from(frame: Option<RawFrame>) -> Self {
        frame.map_or(ParseOutcome::Declined, ParseOutcome::Parsed)
    }
}
