//! Numeric conversion and formatting utilities for opviz-gui.

/// Convert u64 to f64 with allowed precision loss.
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

/// Format a count with comma separators for readability.
#[must_use]
pub fn format_number(n: usize) -> String {
    let digits = n.to_string().into_bytes();
    let mut grouped = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(b',');
        }
        grouped.push(*digit);
    }
    grouped.reverse();
    String::from_utf8(grouped).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_234), "1,234");
        assert_eq!(format_number(12_345_678), "12,345,678");
    }
}
