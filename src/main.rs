//! Ember Lift CLI - build-lifecycle controller for ember-cli apps
//!
//! Usage: ember-lift <COMMAND> [APPS]...
//!
//! Commands:
//!   install  Install front-end dependencies
//!   compile  Build once and cache index.html
//!   run      Keep dev servers running
//!   test     Run the front-end test suite
//!   wait     Block until builds finish
//!   status   Show build state
//!   assets   Print logical asset paths
//!   index    Render the built index.html

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CommandContext::load(&cli)?;

    match cli.command {
        Commands::Install { apps } => commands::lifecycle::cmd_install(&ctx, &apps),
        Commands::Compile { apps } => commands::lifecycle::cmd_compile(&ctx, &apps),
        Commands::Run { apps } => commands::lifecycle::cmd_run(&ctx, &apps),
        Commands::Test { apps } => commands::lifecycle::cmd_test(&ctx, &apps),
        Commands::Wait { apps, timeout_ms } => {
            commands::lifecycle::cmd_wait(&ctx, &apps, timeout_ms)
        }
        Commands::Status { apps } => commands::inspect::cmd_status(&ctx, &apps),
        Commands::Assets { apps } => commands::inspect::cmd_assets(&ctx, &apps),
        Commands::Index { app, head, body } => {
            commands::inspect::cmd_index(&ctx, &app, &head, &body)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ember_lift={default_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
