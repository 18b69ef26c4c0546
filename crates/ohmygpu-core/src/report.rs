//! The GPU report record.
//!
//! All fields are pre-formatted display strings ("8.0 GB", "5 %", "N/A"),
//! not typed quantities - the diagnostic tools this record is built from
//! emit free-form text, and the record passes it through.

use serde::{Deserialize, Serialize};

/// Field value used when a probe cannot determine a metric.
pub const UNKNOWN: &str = "N/A";

/// A single GPU described by whichever diagnostic tool answered first.
///
/// The record exists only for the duration of one report; there is no
/// persistence and no multi-GPU enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuReport {
    /// GPU model name as reported by the tool.
    pub name: String,
    /// Total memory, pre-formatted (e.g. "24576 MiB" or "8.0 GB").
    pub total_memory: String,
    /// Used memory, pre-formatted.
    pub used_memory: String,
    /// GPU utilization, pre-formatted (e.g. "5 %").
    pub utilization: String,
}

impl GpuReport {
    /// Create a report with all four fields.
    pub fn new(
        name: impl Into<String>,
        total_memory: impl Into<String>,
        used_memory: impl Into<String>,
        utilization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            total_memory: total_memory.into(),
            used_memory: used_memory.into(),
            utilization: utilization.into(),
        }
    }

    /// Create a report where only the model name is known.
    pub fn name_only(name: impl Into<String>) -> Self {
        Self::new(name, UNKNOWN, UNKNOWN, UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only_fills_unknown_fields() {
        let report = GpuReport::name_only("AMD Radeon GPU");
        assert_eq!(report.name, "AMD Radeon GPU");
        assert_eq!(report.total_memory, "N/A");
        assert_eq!(report.used_memory, "N/A");
        assert_eq!(report.utilization, "N/A");
    }

    #[test]
    fn new_passes_fields_through() {
        let report = GpuReport::new("RTX 4090", "24576 MiB", "1024 MiB", "5 %");
        assert_eq!(report.total_memory, "24576 MiB");
        assert_eq!(report.utilization, "5 %");
    }
}
