//! Parsing rules for the probed diagnostic tools.
//!
//! Each rule is a pure `fn(&str) -> Option<GpuReport>` over the captured
//! text of one external command. `None` means "no data" - the probe chain
//! falls through to the next tool. The rules are intentionally ad-hoc
//! (column splits, substring markers, one regex): the tools' output
//! formats are themselves loosely specified, so a real tokenizer would
//! buy nothing.

mod inventory;
mod pci;
mod profiler;
mod vendor;

pub use inventory::{powershell_table, wmic_table};
pub use pci::lspci_display;
pub use profiler::profiler_display;
pub use vendor::{nvidia_csv, rocm_marker};

/// Extract the value part of a `"Label: value"` line.
pub(crate) fn value_after_label(line: &str) -> Option<&str> {
    line.split_once(": ").map(|(_, value)| value)
}
