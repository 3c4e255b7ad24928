//! Configuration system for the gui-exception stack-trace analyzers.
//!
//! This crate is pure data: it describes which frame conventions are enabled,
//! which extra localized keywords are accepted, and how verbose logging is.
//! It knows nothing about parsing; `gui-exception-analyzers` builds its
//! parsers from a [`Config`].

pub mod config;
pub mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{Convention, KeywordsConfig, LogLevel, default_conventions, keyword_problem};
