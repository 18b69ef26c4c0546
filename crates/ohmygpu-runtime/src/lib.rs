//! Active probing side of ohmygpu.
//!
//! This crate implements the `CommandRunner` port from `ohmygpu-core`
//! (tokio process spawning with a per-command timeout), detects the host
//! platform, and owns the per-OS probe chains.

#![deny(unused_crate_dependencies)]

mod platform;
mod probes;
mod runner;

pub use platform::Os;
pub use probes::{Probe, probe_chain, run_chain};
pub use runner::ShellCommandRunner;
