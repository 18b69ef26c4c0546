//! macOS display inventory parser (`system_profiler SPDisplaysDataType`).

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::value_after_label;
use crate::report::{GpuReport, UNKNOWN};
use crate::units::format_bytes;

/// VRAM sizes appear as "8 GB", "1536 MB", "8192MB" depending on the
/// hardware generation; capture the integer and the M/G unit letter.
static VRAM_SIZE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*([MG])").unwrap());

/// Parse the output of `system_profiler SPDisplaysDataType`.
///
/// Accumulates two optional fields across the whole listing: the chipset
/// model line and the VRAM line (converted to bytes, then re-formatted).
/// If either was found the report is emitted with "Unknown"/"N/A"
/// defaults for the missing field; used memory and utilization are not
/// available from system_profiler at all.
pub fn profiler_display(output: &str) -> Option<GpuReport> {
    let mut name = None;
    let mut total_memory = None;

    for line in output.lines() {
        if line.contains("Chipset Model")
            && let Some(value) = value_after_label(line)
        {
            name = Some(value.trim().to_string());
        }

        if line.contains("VRAM")
            && let Some(value) = value_after_label(line)
            && let Some(caps) = VRAM_SIZE.captures(value)
            && let Ok(size) = caps[1].parse::<i64>()
        {
            let bytes = match &caps[2] {
                "G" => size.saturating_mul(1024 * 1024 * 1024),
                _ => size.saturating_mul(1024 * 1024),
            };
            total_memory = Some(format_bytes(bytes));
        }
    }

    if name.is_none() && total_memory.is_none() {
        return None;
    }

    Some(GpuReport::new(
        name.unwrap_or_else(|| "Unknown".to_string()),
        total_memory.unwrap_or_else(|| UNKNOWN.to_string()),
        UNKNOWN,
        UNKNOWN,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chipset_and_vram_in_gigabytes() {
        let output = "Graphics/Displays:\n\n\
                      \x20   Radeon Pro 5500M:\n\n\
                      \x20     Chipset Model: AMD Radeon Pro 5500M\n\
                      \x20     Type: GPU\n\
                      \x20     VRAM (Total): 8 GB\n";
        let report = profiler_display(output).unwrap();
        assert_eq!(report.name, "AMD Radeon Pro 5500M");
        assert_eq!(report.total_memory, "8.0 GB");
        assert_eq!(report.used_memory, "N/A");
        assert_eq!(report.utilization, "N/A");
    }

    #[test]
    fn converts_megabyte_vram_values() {
        let output = "      Chipset Model: Intel Iris Plus Graphics 650\n\
                      \x20     VRAM (Dynamic, Max): 1536 MB\n";
        let report = profiler_display(output).unwrap();
        assert_eq!(report.total_memory, "1.5 GB");
    }

    #[test]
    fn chipset_without_vram_defaults_memory_to_unknown() {
        let output = "      Chipset Model: Apple M2 Pro\n      Type: GPU\n";
        let report = profiler_display(output).unwrap();
        assert_eq!(report.name, "Apple M2 Pro");
        assert_eq!(report.total_memory, "N/A");
    }

    #[test]
    fn vram_without_chipset_defaults_name_to_unknown() {
        let output = "      VRAM (Total): 4 GB\n";
        let report = profiler_display(output).unwrap();
        assert_eq!(report.name, "Unknown");
        assert_eq!(report.total_memory, "4.0 GB");
    }

    #[test]
    fn no_recognized_lines_yields_no_data() {
        assert!(profiler_display("Graphics/Displays:\n\n    Displays:\n").is_none());
        assert!(profiler_display("").is_none());
    }
}
