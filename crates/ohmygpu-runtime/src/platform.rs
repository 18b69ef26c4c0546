//! Platform detection utilities.

/// Operating system detection result.
///
/// `Unsupported` is not an error: it resolves to an empty probe chain, so
/// the report uniformly degrades to "no GPU found".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Linux,
    MacOs,
    Unsupported,
}

impl Os {
    /// Map a host OS identifier string (as in `std::env::consts::OS`) to
    /// a platform. Pure; anything unrecognized is `Unsupported`.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            _ => Self::Unsupported,
        }
    }

    /// Detect the operating system this process is running on.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }
}
