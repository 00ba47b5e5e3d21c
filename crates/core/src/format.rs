//! Number formatting for the product grid (Indonesian locale).

/// Format a numeric string with Indonesian separators: `.` for thousands,
/// `,` for decimals, at most three fraction digits.
///
/// Empty or missing values render as `"0"`; non-numeric input renders as
/// `"NaN"`, the way the grid always has.
///
/// ```
/// use pazarin_core::format::format_rupiah;
///
/// assert_eq!(format_rupiah(Some("1250000")), "1.250.000");
/// assert_eq!(format_rupiah(None), "0");
/// ```
pub fn format_rupiah(value: Option<&str>) -> String {
    let raw = value.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return "0".to_string();
    }
    let Ok(number) = raw.parse::<f64>() else {
        return "NaN".to_string();
    };
    if !number.is_finite() {
        return "NaN".to_string();
    }

    let fixed = format!("{:.3}", number.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if number < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_rupiah(Some("0")), "0");
        assert_eq!(format_rupiah(Some("999")), "999");
        assert_eq!(format_rupiah(Some("1000")), "1.000");
        assert_eq!(format_rupiah(Some("12500")), "12.500");
        assert_eq!(format_rupiah(Some("123456789")), "123.456.789");
    }

    #[test]
    fn decimals_use_comma() {
        assert_eq!(format_rupiah(Some("12500.5")), "12.500,5");
        assert_eq!(format_rupiah(Some("1.23456")), "1,235");
        assert_eq!(format_rupiah(Some("10.000")), "10");
    }

    #[test]
    fn negatives_keep_sign() {
        assert_eq!(format_rupiah(Some("-4500")), "-4.500");
    }

    #[test]
    fn empty_and_garbage() {
        assert_eq!(format_rupiah(Some("")), "0");
        assert_eq!(format_rupiah(Some("   ")), "0");
        assert_eq!(format_rupiah(Some("abc")), "NaN");
    }
}
