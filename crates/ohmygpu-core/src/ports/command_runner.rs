//! Command runner trait definition.
//!
//! This port abstracts running an external diagnostic tool and capturing
//! its text output. Implementations live in adapters (e.g. ohmygpu-runtime).

use async_trait::async_trait;

/// Port for running an external command and capturing its output.
///
/// The contract deliberately collapses every failure class into `None`:
/// a missing binary, a spawn error, a timeout, and a tool that produced
/// no text are all "no output" to the caller. Probes fall through to the
/// next tool in the chain either way, so nothing error-like crosses this
/// boundary.
///
/// Implementations must merge stderr into the returned text - several of
/// the probed tools print useful output on stderr or exit non-zero while
/// still printing something parseable.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, wait for it to exit, and return the
    /// merged stdout/stderr text, or `None` if there is nothing to parse.
    async fn run(&self, program: &str, args: &[&str]) -> Option<String>;
}
