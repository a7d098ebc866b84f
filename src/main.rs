// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg - Commit Message Linter
//!
//! Entry point for the commit-msg hook binary.

use clap::Parser;
use commit_msg::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        if e.is_reported() {
            tracing::debug!("Exiting with failure: {}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commit_msg=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!(
            "commit-msg {} debug logging enabled",
            commit_msg::version::version_string()
        );
    }
}
