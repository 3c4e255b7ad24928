//! Errors raised while reading, writing or checking the config file.
//!
//! `Config::load_from` and `Config::save_to` return `anyhow::Result`; the
//! failure underneath is a [`ConfigError`] that callers can `downcast_ref`.

/// Why a config file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading, writing or renaming the file failed.
    #[error("cannot access gui-exception config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not YAML, or does not fit the config schema.
    #[error("malformed gui-exception config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// The file parsed but describes an analyzer that cannot be built.
    #[error("invalid gui-exception config: {0}")]
    Validation(String),
}
