// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared formatting utilities for console output.

/// Format a count with thousand separators (`48234` -> `48,234`).
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format a byte count using binary units, one decimal place above 1 KiB.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    format!("{:.1} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        // File counts as the verbose summary prints them.
        assert_eq!(format_number(4), "4");
        assert_eq!(format_number(512), "512");
        assert_eq!(format_number(1200), "1,200");
        assert_eq!(format_number(20_000), "20,000");
        // Byte totals of a large dump.
        assert_eq!(format_number(3_145_728), "3,145,728");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MiB");
    }
}
