//! Byte count formatting.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count as a one-decimal value with a binary unit.
///
/// Divides by 1024 until the value drops below 1024 or TB is reached, so
/// results land in `[1.0, 1024.0)` except below 1 KB and above the TB
/// range. Zero and negative inputs are passed through unguarded
/// ("0.0 B", "-512.0 B") - the upstream tools never report them, and
/// guessing a clamp here would only hide a tool bug.
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: i64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{size:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_unit_boundaries() {
        assert_eq!(format_bytes(1023), "1023.0 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1_048_576), "1.0 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn typical_vram_sizes() {
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GB");
        assert_eq!(format_bytes(12_884_901_888), "12.0 GB");
        assert_eq!(format_bytes(1536 * 1024 * 1024), "1.5 GB");
    }

    #[test]
    fn value_stays_in_range_until_the_last_unit() {
        for bytes in [1, 512, 999, 4096, 5_000_000, 3_000_000_000, 7_000_000_000_000] {
            let formatted = format_bytes(bytes);
            let value: f64 = formatted
                .split_whitespace()
                .next()
                .unwrap()
                .parse()
                .unwrap();
            if bytes >= 1024 {
                assert!((1.0..1024.0).contains(&value), "{bytes} -> {formatted}");
            }
        }
    }

    #[test]
    fn terabytes_is_the_last_unit_and_may_overflow_it() {
        assert_eq!(format_bytes(1_099_511_627_776), "1.0 TB");
        // 1024 TB has nowhere further to go
        assert_eq!(format_bytes(1 << 50), "1024.0 TB");
    }

    #[test]
    fn zero_and_negative_pass_through() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(-512), "-512.0 B");
    }
}
