//! CLI entry point - the composition root.
//!
//! This is the only place where infrastructure is wired together: the
//! tokio-backed command runner is built here and handed to the probe
//! chain as a `CommandRunner` port.

use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ohmygpu_cli::Cli;
use ohmygpu_cli::presentation::render_report;
use ohmygpu_runtime::{Os, ShellCommandRunner, probe_chain, run_chain};

/// Logs go to stderr so the report on stdout stays exact.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runner = ShellCommandRunner::new(Duration::from_secs(cli.timeout_secs));

    let os = Os::current();
    debug!(?os, "detected host platform");

    let report = run_chain(&runner, probe_chain(os)).await;
    print!("{}", render_report(report.as_ref()));

    // The report is the outcome; a missing GPU is not a process failure.
    Ok(())
}
