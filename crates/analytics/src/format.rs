//! Human-readable rendering for report fields.

use serde::Serializer;

/// One decimal place: `200.0%`.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// No decimals: `3248%`.
pub fn whole_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Dollar amount with thousands separators and no decimals: `$7,700,000`.
///
/// Negative amounts keep their sign even when they round to zero (`$-0`).
pub fn currency(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("${}{}", sign, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub(crate) fn serialize_percent<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&percent(*value))
}

pub(crate) fn serialize_whole_percent<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&whole_percent(*value))
}

pub(crate) fn serialize_currency<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&currency(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(200.0), "200.0%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(-40.0), "-40.0%");
        assert_eq!(percent(12.345), "12.3%");
    }

    #[test]
    fn test_whole_percent() {
        assert_eq!(whole_percent(3247.826), "3248%");
        assert_eq!(whole_percent(0.0), "0%");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(7_700_000.0), "$7,700,000");
        assert_eq!(currency(230_000.0), "$230,000");
        assert_eq!(currency(999.0), "$999");
        assert_eq!(currency(1000.0), "$1,000");
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(1234.6), "$1,235");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(currency(-1_500_000.0), "$-1,500,000");
        assert_eq!(currency(-0.2), "$-0");
        assert_eq!(currency(-0.0), "$-0");
    }
}
