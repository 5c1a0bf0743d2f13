//! Number formatting for panels and legends

/// Format a value with thousands separators, rounded to the nearest
/// integer (e.g., 1234567.4 -> "1,234,567")
pub fn thousands(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative && rounded > 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a share percentage to two decimals (e.g., 12.3456 -> "12.35%")
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(100_000_000.0), "100,000,000");
    }

    #[test]
    fn test_thousands_rounds() {
        assert_eq!(thousands(1234.6), "1,235");
        assert_eq!(thousands(1234.4), "1,234");
    }

    #[test]
    fn test_thousands_negative() {
        assert_eq!(thousands(-1234567.0), "-1,234,567");
        assert_eq!(thousands(-0.2), "0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(12.3456), "12.35%");
        assert_eq!(percent(5.0), "5.00%");
    }
}
