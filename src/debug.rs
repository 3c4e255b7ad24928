//! Diagnostic logging for the gui-exception binary.
//!
//! Routes every `log::*!` call from the analyzers, the config crate and the
//! binary through one bridge that writes timestamped lines to stderr, so
//! stdout only ever carries the report.
//!
//! Level precedence:
//! - `--log-level` flag
//! - `RUST_LOG` environment variable (a plain level name such as `debug`)
//! - `log_level` from the config file, applied once it is loaded
//! - `warn`

use gui_exception_config::LogLevel;
use log::LevelFilter;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the effective level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelSource {
    Flag,
    Env,
    Config,
    Default,
}

impl LevelSource {
    /// Flag and environment choices are not overridden by the config file.
    fn is_pinned(self) -> bool {
        matches!(self, LevelSource::Flag | LevelSource::Env)
    }
}

struct BridgeState {
    level: LevelFilter,
    source: LevelSource,
}

/// `log::Log` implementation installed once per process.
struct LogBridge {
    state: Mutex<BridgeState>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.state.lock().level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        // Hold the lock while writing so lines from several threads never interleave
        let _state = self.state.lock();
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Render one log line: `[timestamp] [LEVEL] [target] message`.
pub fn format_line(level: log::Level, target: &str, msg: &str) -> String {
    let level_str = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    format!("[{}] [{}] [{}] {}\n", get_timestamp(), level_str, target, msg)
}

/// Pick the startup level from the CLI flag and the `RUST_LOG` value.
///
/// Unrecognized `RUST_LOG` values (such as per-module directives) are ignored.
fn resolve_startup_level(
    flag: Option<LogLevel>,
    rust_log: Option<&str>,
) -> (LevelFilter, LevelSource) {
    if let Some(level) = flag {
        return (level.to_level_filter(), LevelSource::Flag);
    }
    if let Some(level) = rust_log.and_then(|value| LogLevel::from_name(value.trim())) {
        return (level.to_level_filter(), LevelSource::Env);
    }
    (LogLevel::default().to_level_filter(), LevelSource::Default)
}

/// Install the stderr log bridge.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_log_bridge(flag: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, source) = resolve_startup_level(flag, rust_log.as_deref());

    let mut installed = false;
    let bridge = BRIDGE.get_or_init(|| {
        installed = true;
        LogBridge {
            state: Mutex::new(BridgeState { level, source }),
        }
    });
    if !installed {
        return;
    }

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level);
        log::debug!("log bridge installed at {} ({:?})", level, source);
    }
}

/// Apply the config file's level unless the flag or `RUST_LOG` already chose one.
///
/// No-op when the bridge is not installed (library use, tests).
pub fn apply_config_level(level: LogLevel) {
    let Some(bridge) = BRIDGE.get() else {
        return;
    };
    let mut state = bridge.state.lock();
    if state.source.is_pinned() {
        return;
    }
    state.level = level.to_level_filter();
    state.source = LevelSource::Config;
    log::set_max_level(state.level);
}
