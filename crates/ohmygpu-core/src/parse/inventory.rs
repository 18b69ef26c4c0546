//! Windows inventory parsers: wmic and the PowerShell fallback.
//!
//! Both tools print a loose fixed-width table (name column, AdapterRAM
//! column). Columns are split on runs of two or more spaces - a heuristic,
//! not a tokenizer, because neither tool specifies its layout.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::{GpuReport, UNKNOWN};
use crate::units::format_bytes;

static COLUMN_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

fn split_columns(line: &str) -> Vec<&str> {
    COLUMN_GAP.split(line).collect()
}

/// Skip rows that are actually the header leaking through ("Name", "name").
fn is_header_token(name: &str) -> bool {
    name.is_empty() || name.to_lowercase().contains("name")
}

/// Parse the output of `wmic path win32_videocontroller get name,adapterram`.
///
/// Skips the header line, then takes the first data row: name from the
/// first column, RAM byte count from the last. A numeric positive RAM
/// value is byte-formatted; a non-numeric value degrades to a name-only
/// record; zero RAM rows are skipped (wmic reports 0 for some virtual
/// adapters).
pub fn wmic_table(output: &str) -> Option<GpuReport> {
    for line in output.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let columns = split_columns(line);
        if columns.len() < 2 {
            continue;
        }

        let name = columns[0].trim();
        let ram = columns[columns.len() - 1].trim();
        if is_header_token(name) {
            continue;
        }

        match ram.parse::<i64>() {
            Ok(bytes) if bytes > 0 => {
                return Some(GpuReport::new(name, format_bytes(bytes), UNKNOWN, UNKNOWN));
            }
            Ok(_) => {}
            Err(_) => return Some(GpuReport::name_only(name)),
        }
    }

    None
}

/// Parse the output of
/// `powershell -Command "Get-WmiObject Win32_VideoController | Select-Object Name, AdapterRAM"`.
///
/// Same tabular heuristic as [`wmic_table`], plus skipping the `----`
/// separator row PowerShell prints under its header.
pub fn powershell_table(output: &str) -> Option<GpuReport> {
    for line in output.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() || line.contains("---") {
            continue;
        }

        let columns = split_columns(line);
        let name = columns[0].trim();
        if is_header_token(name) {
            continue;
        }

        if columns.len() >= 2 {
            match columns[columns.len() - 1].trim().parse::<i64>() {
                Ok(bytes) if bytes > 0 => {
                    return Some(GpuReport::new(name, format_bytes(bytes), UNKNOWN, UNKNOWN));
                }
                Ok(_) => {}
                Err(_) => return Some(GpuReport::name_only(name)),
            }
        }
    }

    None
}
