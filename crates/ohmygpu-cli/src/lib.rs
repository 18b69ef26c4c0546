//! CLI surface for ohmygpu: argument parsing and report rendering.

#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary target (main.rs)
use anyhow as _;
use ohmygpu_runtime as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

pub mod parser;
pub mod presentation;

pub use parser::Cli;
