//! gui-exception: source-location extraction for a desktop test runner.
//!
//! The parsing kernel lives in [`gui_exception_analyzers`]; this crate adds
//! the command-line front end, report rendering and diagnostic logging.

pub mod cli;
pub mod debug;
pub mod report;

pub use gui_exception_analyzers as analyzers;
pub use gui_exception_config as config;
