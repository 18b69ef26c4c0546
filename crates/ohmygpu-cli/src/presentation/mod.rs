//! Report rendering.
//!
//! The output format is fixed human-readable text; there is no
//! machine-readable mode. Renderers are pure so the exact lines can be
//! asserted in tests.

use ohmygpu_core::GpuReport;

/// Render the final report.
///
/// Success is four labeled fields plus a closing reassurance; failure is
/// exactly two error lines pointing at driver installation.
pub fn render_report(report: Option<&GpuReport>) -> String {
    match report {
        Some(gpu) => format!(
            "\nOH MY GPU:\n\n\
             GPU model:      {}\n\
             Total memory:   {}\n\
             Used memory:    {}\n\
             Utilization:    {}\n\
             \nGPU is fine.\n",
            gpu.name, gpu.total_memory, gpu.used_memory, gpu.utilization
        ),
        None => "[ERROR] GPU not found!\n\
                 [ERROR] Make sure GPU drivers are installed.\n"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_report_lists_all_four_fields() {
        let report = GpuReport::new("NVIDIA GeForce RTX 4090", "24576 MiB", "1024 MiB", "5 %");
        let rendered = render_report(Some(&report));

        assert_eq!(
            rendered,
            "\nOH MY GPU:\n\n\
             GPU model:      NVIDIA GeForce RTX 4090\n\
             Total memory:   24576 MiB\n\
             Used memory:    1024 MiB\n\
             Utilization:    5 %\n\
             \nGPU is fine.\n"
        );
    }

    #[test]
    fn failure_report_is_exactly_two_error_lines() {
        let rendered = render_report(None);
        assert_eq!(
            rendered,
            "[ERROR] GPU not found!\n[ERROR] Make sure GPU drivers are installed.\n"
        );
    }

    #[test]
    fn unknown_fields_render_as_is() {
        let report = GpuReport::name_only("AMD Radeon GPU");
        let rendered = render_report(Some(&report));
        assert!(rendered.contains("GPU model:      AMD Radeon GPU"));
        assert!(rendered.contains("Total memory:   N/A"));
    }
}
