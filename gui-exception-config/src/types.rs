//! Enum and keyword types referenced by [`crate::Config`].

use serde::{Deserialize, Serialize};

/// A stack-trace location convention that the analyzers can recognise.
///
/// The order of conventions in the config is the order in which frame
/// parsers are registered (earlier entries are tried first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Absolute Unix paths: `/home/user/File.cs:line 42`
    Unix,
    /// Drive-letter Windows paths: `C:\work\File.cs:line 42`
    Windows,
    /// Frames carrying a method but no source path: `at Foo.Bar()`
    Bare,
}

impl Convention {
    /// Display name for UI and CLI output
    pub fn display_name(&self) -> &'static str {
        match self {
            Convention::Unix => "Unix",
            Convention::Windows => "Windows",
            Convention::Bare => "Bare frame",
        }
    }
}

/// Conventions enabled when the config file does not list any.
pub fn default_conventions() -> Vec<Convention> {
    vec![Convention::Unix, Convention::Windows]
}

/// Extra localized keywords appended to the built-in sets.
///
/// The built-ins (`at`/`à`, `in`/`dans`, `line`/`ligne`) are always active;
/// entries here only add to them. For a German runtime for example:
///
/// ```yaml
/// keywords:
///   frame_markers: [bei]
///   line_markers: [Zeile]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordsConfig {
    /// Words introducing a frame, before the method signature
    pub frame_markers: Vec<String>,
    /// Words separating the method signature from the source path
    pub path_markers: Vec<String>,
    /// Words preceding the line number after the path's trailing colon
    pub line_markers: Vec<String>,
}

impl KeywordsConfig {
    /// True when no extra keyword is configured.
    pub fn is_empty(&self) -> bool {
        self.frame_markers.is_empty() && self.path_markers.is_empty() && self.line_markers.is_empty()
    }
}

/// Describe why `word` cannot be used as a trace keyword, or `None` if it is fine.
///
/// Keywords are matched literally as whole words, so they must not be empty
/// and must not contain whitespace, colons or digits (which belong to the
/// location grammar itself).
pub fn keyword_problem(word: &str) -> Option<&'static str> {
    if word.is_empty() {
        Some("keyword is empty")
    } else if word.chars().any(char::is_whitespace) {
        Some("keyword contains whitespace")
    } else if word.contains(':') {
        Some("keyword contains ':'")
    } else if word.chars().any(|c| c.is_ascii_digit()) {
        Some("keyword contains a digit")
    } else {
        None
    }
}

/// Log level for diagnostic output.
///
/// The `--log-level` CLI flag and the `RUST_LOG` environment variable take
/// precedence over this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Off => "Off",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// All available levels for UI iteration
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Parse a level name case-insensitively (`"debug"`, `"WARN"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
