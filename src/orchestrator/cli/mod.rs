//! # CLI Layer
//!
//! The only place that knows about the terminal, logging setup and process exit.
//!
//! ## Responsibilities
//!
//! 1. **Arguments**: optional flags via clap (`setup.rs`); with none given the program
//!    runs the interactive demonstration exactly as described in the library docs.
//! 2. **Logging**: a `tracing` fmt subscriber on stderr. WARN by default, DEBUG with
//!    `--verbose`. Stdout is reserved for the conversation with the user.
//! 3. **Interrupts**: Ctrl+C prints a farewell and exits with status 0.
//! 4. **Fault boundary**: any error from the flow is reported once, as a single line,
//!    and the process still exits with status 0. Nothing is retried or cleaned up.
//! 5. **Rendering**: banners and summaries go through the templates in `render.rs`.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

use clap::Parser;
use render::{print_status, Status};
use setup::Cli;
use std::io::Write;
use tracing::{error, warn, Level};

const INTERRUPTED_MESSAGE: &str = "\n\nDemo interrupted. Thank you for your interest.";

pub fn run() {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(config.verbose);
    install_interrupt_handler();

    if let Err(e) = commands::run(&cli, config) {
        error!(error = %e, "demonstration failed");
        print_status(Status::Error, &format!("\n\nAn error occurred: {}", e));
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        print_status(Status::Notice, INTERRUPTED_MESSAGE);
        let _ = std::io::stdout().flush();
        std::process::exit(0);
    });
    if let Err(e) = installed {
        warn!(error = %e, "could not install Ctrl+C handler");
    }
}
