//! Vendor tool parsers: nvidia-smi and rocm-smi.

use crate::report::GpuReport;

/// Parse the output of
/// `nvidia-smi --query-gpu=name,memory.total,memory.used,utilization.gpu --format=csv,noheader`.
///
/// Takes the first non-empty line, splits on commas, and requires at least
/// four fields. Fields are trimmed and passed through verbatim - nvidia-smi
/// already formats them ("24576 MiB", "5 %").
pub fn nvidia_csv(output: &str) -> Option<GpuReport> {
    let line = output.lines().find(|line| !line.trim().is_empty())?;
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 4 {
        return None;
    }

    Some(GpuReport::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
        fields[3].trim(),
    ))
}

/// Parse the output of `rocm-smi --showid` (plus `--showtemp` on Windows).
///
/// rocm-smi's table layout varies across versions, so this rule only
/// checks that the tool answered about a GPU at all and synthesizes a
/// generic AMD record with unknown memory/utilization.
pub fn rocm_marker(output: &str) -> Option<GpuReport> {
    output
        .contains("GPU")
        .then(|| GpuReport::name_only("AMD Radeon GPU"))
}
