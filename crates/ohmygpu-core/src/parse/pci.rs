//! Linux PCI listing parser (`lspci -v`).

use crate::parse::value_after_label;
use crate::report::GpuReport;

/// Display-class device keywords lspci uses for GPUs.
const CONTROLLER_KEYWORDS: &[&str] = &[
    "VGA compatible controller",
    "Display controller",
    "3D controller",
];

/// Vendor/brand keywords that distinguish a GPU row from e.g. a plain
/// framebuffer device.
const VENDOR_KEYWORDS: &[&str] = &["Intel", "AMD", "NVIDIA", "Radeon", "RTX", "GTX", "Arc"];

/// Parse the output of `lspci -v`.
///
/// Scans for the first line that names both a display-class controller and
/// a known GPU vendor, and extracts the device name after the first
/// `": "`. lspci knows nothing about memory or utilization, so those
/// fields stay unknown.
pub fn lspci_display(output: &str) -> Option<GpuReport> {
    for line in output.lines() {
        let is_display_class = CONTROLLER_KEYWORDS.iter().any(|k| line.contains(k));
        let is_gpu_vendor = VENDOR_KEYWORDS.iter().any(|k| line.contains(k));

        if is_display_class && is_gpu_vendor {
            let name = value_after_label(line).unwrap_or(line);
            return Some(GpuReport::name_only(name.trim()));
        }
    }

    None
}
