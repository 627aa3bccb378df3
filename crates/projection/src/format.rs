// Copyright 2025 AdPilot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Presentation formatting for projection values.
//!
//! All rounding happens here, at display time only. The engine carries
//! full-precision values end to end; nothing formatted ever feeds back into
//! the pipeline.

/// Format a number with thousands separators and a fixed decimal count.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (formatted, None),
    };
    let grouped = group_thousands(&int_part);
    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a currency amount to two decimals, e.g. `$5,000.00`.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value, 2))
    } else {
        format!("${}", format_number(value, 2))
    }
}

/// Format a count (clicks, orders) to zero decimals, e.g. `2,041`.
pub fn format_count(value: f64) -> String {
    format_number(value, 0)
}

/// Format a percentage with up to two decimals, trailing zeros trimmed,
/// e.g. `4.1%`.
pub fn format_percent(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

/// Format a ROAS multiple to two decimals with an `x` suffix, e.g. `1.26x`.
pub fn format_roas(value: f64) -> String {
    format!("{value:.2}x")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(format_currency(5000.0), "$5,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(2.45), "$2.45");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-166.666), "-$166.67");
    }

    #[test]
    fn test_count_rounds_to_whole() {
        assert_eq!(format_count(2040.816), "2,041");
        assert_eq!(format_count(83.67), "84");
        assert_eq!(format_count(9.2), "9");
    }

    #[test]
    fn test_number_fixed_decimals() {
        assert_eq!(format_number(2040.8163, 2), "2,040.82");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(999.0, 0), "999");
    }

    #[test]
    fn test_percent_trims_trailing_zeros() {
        assert_eq!(format_percent(4.1), "4.1%");
        assert_eq!(format_percent(3.0), "3%");
        assert_eq!(format_percent(2.75), "2.75%");
    }

    #[test]
    fn test_roas_suffix() {
        assert_eq!(format_roas(1.2550204081632653), "1.26x");
        assert_eq!(format_roas(4.0), "4.00x");
    }
}
