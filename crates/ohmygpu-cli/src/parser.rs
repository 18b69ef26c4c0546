//! Main CLI parser.
//!
//! No subcommands: invoking the binary runs the probe chain and prints
//! the report. The process exits 0 whether or not a GPU was found.

use clap::Parser;

/// Command-line interface definition for the GPU report tool.
#[derive(Parser)]
#[command(name = "ohmygpu")]
#[command(about = "Report GPU model, memory, and utilization for this machine")]
#[command(version)]
pub struct Cli {
    /// Maximum seconds to wait for each diagnostic tool before moving on
    #[arg(long = "timeout-secs", default_value_t = 5)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
