//! Clock formatting and duration-field parsing
//!
//! Provides the MM:SS rendering used across the UI and the lenient
//! minutes parser applied to the editable duration fields.

/// Format a number of seconds as MM:SS.
///
/// # Examples
/// ```
/// use pomotui::util::units::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(90), "01:30");
/// assert_eq!(format_clock(25 * 60), "25:00");
/// ```
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Parse a duration field as a whole number of minutes.
///
/// Leading and trailing whitespace is ignored. Returns `None` for empty,
/// non-numeric, zero, or negative input; callers keep their prior value
/// in that case and no error is surfaced.
///
/// # Examples
/// ```
/// use pomotui::util::units::parse_minutes;
///
/// assert_eq!(parse_minutes(" 25 "), Some(25));
/// assert_eq!(parse_minutes(""), None);
/// assert_eq!(parse_minutes("abc"), None);
/// assert_eq!(parse_minutes("-5"), None);
/// assert_eq!(parse_minutes("0"), None);
/// ```
pub fn parse_minutes(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<i64>() {
        Ok(minutes) if minutes > 0 => Some(minutes as u64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(1499), "24:59");
        assert_eq!(format_clock(100 * 60), "100:00");
    }

    #[test]
    fn test_parse_minutes_valid() {
        assert_eq!(parse_minutes("25"), Some(25));
        assert_eq!(parse_minutes("  5\t"), Some(5));
        assert_eq!(parse_minutes("1"), Some(1));
    }

    #[test]
    fn test_parse_minutes_invalid() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("   "), None);
        assert_eq!(parse_minutes("abc"), None);
        assert_eq!(parse_minutes("2.5"), None);
        assert_eq!(parse_minutes("-1"), None);
        assert_eq!(parse_minutes("0"), None);
    }
}
