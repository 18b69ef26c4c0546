//! Core domain types and port definitions for ohmygpu.
//!
//! This crate is pure: it owns the report record, the command-runner port,
//! the per-tool output parsing rules, and byte formatting. Active probing
//! (process spawning, OS detection, probe chains) lives in `ohmygpu-runtime`.

#![deny(unused_crate_dependencies)]

pub mod parse;
pub mod ports;
pub mod report;
pub mod units;

// Re-export commonly used types for convenience
pub use ports::CommandRunner;
pub use report::GpuReport;
pub use units::format_bytes;
