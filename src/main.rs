use clap::Parser;
use gui_exception::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // CLI --log-level flag takes precedence, then RUST_LOG, then config (applied on load).
    gui_exception::debug::init_log_bridge(cli.log_level);
    log::info!("Starting gui-exception");

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gui-exception: error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
