//! Display formatters for vehicle parameters.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MS_TO_MPH: f64 = 2.237;
const KG_TO_LBS: f64 = 2.20462;

/// Placeholder for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Round half toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Format an integer with `,` thousands separators.
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Speed in m/s shown in mph; zero or negative means the feature works at any speed.
#[must_use]
pub fn format_speed(speed_ms: Option<f64>) -> String {
    match speed_ms {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if v > 0.0 => format!("{} mph", round_half_up(v * MS_TO_MPH)),
        Some(_) => "any speed".to_string(),
    }
}

/// Approximate value with an optional unit suffix.
#[must_use]
pub fn format_value(value: Option<f64>, unit: &str) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if v.abs() >= 1000.0 => {
            format!("~{}{unit}", format_thousands(round_half_up(v)))
        }
        Some(v) => format!("~{v:.2}{unit}"),
    }
}

/// Mass in kg shown in lbs.
#[must_use]
pub fn format_weight(kg: Option<f64>) -> String {
    match kg {
        None => NOT_AVAILABLE.to_string(),
        Some(v) => format!("{} lbs", format_thousands(round_half_up(v * KG_TO_LBS))),
    }
}

#[must_use]
pub fn format_boolean(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[must_use]
pub fn format_enabled(value: Option<bool>) -> String {
    match value {
        Some(true) => "Enabled".to_string(),
        Some(false) => "Disabled".to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Truncate to `max_width` display columns, ending with `...` when cut.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Pad with spaces to `width` display columns, truncating longer text.
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let used = UnicodeWidthStr::width(cut.as_str());
    format!("{cut}{}", " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-2500), "-2,500");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(None), "N/A");
        assert_eq!(format_speed(Some(0.0)), "any speed");
        assert_eq!(format_speed(Some(-1.0)), "any speed");
        // 12 m/s * 2.237 = 26.844
        assert_eq!(format_speed(Some(12.0)), "27 mph");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(None, " m"), "N/A");
        assert_eq!(format_value(Some(2.7), " m"), "~2.70 m");
        assert_eq!(format_value(Some(15.38), ""), "~15.38");
        assert_eq!(format_value(Some(123_456.7), ""), "~123,457");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(None), "N/A");
        // 1326 kg * 2.20462 = 2923.3
        assert_eq!(format_weight(Some(1326.0)), "2,923 lbs");
    }

    #[test]
    fn test_format_booleans() {
        assert_eq!(format_boolean(Some(true)), "Yes");
        assert_eq!(format_boolean(Some(false)), "No");
        assert_eq!(format_enabled(Some(true)), "Enabled");
        assert_eq!(format_enabled(None), "N/A");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Honda Civic", 20), "Honda Civic");
        assert_eq!(truncate_to_width("Honda Civic 2022", 10), "Honda C...");
        assert_eq!(truncate_to_width("Škoda Octavia", 8), "Škoda...");
        assert_eq!(truncate_to_width("Honda", 2), "Ho");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Kia", 5), "Kia  ");
        assert_eq!(pad_to_width("Hyundai Ioniq", 8), "Hyund...");
    }
}
