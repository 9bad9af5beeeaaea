const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

/// Human-readable size with up to two decimals, trailing zeros trimmed.
///
/// ```
/// use bundlelens_core::format_bytes;
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let fixed = to_fixed(scaled, 2);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Share of `part` in `total` with one decimal; an empty total reads as 0.0.
pub fn format_percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    to_fixed(part as f64 / total as f64 * 100.0, 1)
}

/// Kilobytes with one decimal, as in `12.3KB`.
pub fn format_kb(bytes: u64) -> String {
    format!("{}KB", to_fixed(bytes as f64 / 1024.0, 1))
}

/// Fixed-point text with exact ties rounded up rather than to even.
fn to_fixed(value: f64, digits: u32) -> String {
    // An exact tie at `digits` places is an odd multiple of 2^-(digits + 1).
    let halves = value * f64::from(1u32 << (digits + 1));
    if halves.fract() == 0.0 && halves % 2.0 == 1.0 && halves < 2f64.powi(53) {
        let scaled = (halves as u64 * 5u64.pow(digits) + 1) / 2;
        if digits == 0 {
            return scaled.to_string();
        }
        let unit = 10u64.pow(digits);
        return format!(
            "{}.{:0width$}",
            scaled / unit,
            scaled % unit,
            width = digits as usize
        );
    }
    format!("{:.*}", digits as usize, value)
}
