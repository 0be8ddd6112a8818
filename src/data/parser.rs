//! Line-level field parsing for temperature CSV files.
//!
//! Two time formats are understood:
//! - [`TimeFormat::Seconds`]: `12.5,30.0`, read like a `%lf,%lf` scan: the
//!   time must end right at the comma, the temperature needs a numeric prefix.
//! - [`TimeFormat::Clock`]: `0:10:00,28.0`, time converted to fractional
//!   hours and the temperature read best-effort (no numeric prefix means 0.0).

use super::series::Sample;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("invalid time '{0}', expected H:M:S")]
    InvalidTime(String),
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// How the time column of a file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Plain float, used as-is (seconds).
    Seconds,
    /// `H:M:S`, converted to fractional hours.
    #[default]
    Clock,
}

/// Convert an `H:M:S` string into fractional hours.
///
/// Hours and minutes must be integers; seconds may carry a fraction.
pub fn clock_to_hours(value: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidTime(value.trim().to_string());

    let mut parts = value.splitn(3, ':');
    let (Some(h), Some(m), Some(s)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let hours: i64 = h.trim().parse().map_err(|_| invalid())?;
    let minutes: i64 = m.trim().parse().map_err(|_| invalid())?;
    let seconds = float_prefix(s).ok_or_else(invalid)?;

    Ok(hours as f64 + minutes as f64 / 60.0 + seconds / 3600.0)
}

/// Parse the longest leading float in `value`, ignoring leading whitespace.
///
/// Returns `None` when no digits start the text.
pub fn float_prefix(value: &str) -> Option<f64> {
    scan_float(value).map(|(number, _)| number)
}

/// Like [`float_prefix`], also returning the text left after the number.
pub fn scan_float(value: &str) -> Option<(f64, &str)> {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let number = text[..end].parse().ok()?;
    Some((number, &text[end..]))
}

/// Best-effort float conversion: no numeric prefix yields 0.0.
pub fn lenient_float(value: &str) -> f64 {
    float_prefix(value).unwrap_or(0.0)
}

fn invalid_number(field: &'static str, value: &str) -> ParseError {
    ParseError::InvalidNumber {
        field,
        value: value.trim().to_string(),
    }
}

/// Time field of a seconds file: a number ending exactly at the comma.
fn scan_time(value: &str) -> Result<f64, ParseError> {
    match scan_float(value) {
        Some((number, "")) => Ok(number),
        _ => Err(invalid_number("time", value)),
    }
}

/// Temperature field of a seconds file: trailing text after the number is ignored.
fn scan_temperature(value: &str) -> Result<f64, ParseError> {
    float_prefix(value).ok_or_else(|| invalid_number("temperature", value))
}

fn non_empty<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ParseError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ParseError::MissingField(field)),
    }
}

/// Build a sample from already-split time and temperature fields.
pub fn parse_fields(
    format: TimeFormat,
    time: Option<&str>,
    temperature: Option<&str>,
) -> Result<Sample, ParseError> {
    let time = non_empty("time", time)?;
    let temperature = non_empty("temperature", temperature)?;

    match format {
        TimeFormat::Seconds => Ok(Sample::new(scan_time(time)?, scan_temperature(temperature)?)),
        TimeFormat::Clock => Ok(Sample::new(clock_to_hours(time)?, lenient_float(temperature))),
    }
}

/// Parse one raw `time,temperature` line, splitting on the first comma.
pub fn parse_line(format: TimeFormat, line: &str) -> Result<Sample, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.split_once(',') {
        Some((time, temperature)) => parse_fields(format, Some(time), Some(temperature)),
        None => parse_fields(format, Some(line), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_converts_to_hours() {
        assert_eq!(clock_to_hours("0:00:00").unwrap(), 0.0);
        assert_eq!(clock_to_hours("1:30:00").unwrap(), 1.5);
        assert!((clock_to_hours("0:10:00").unwrap() - 1.0 / 6.0).abs() < 1e-12);
        assert!((clock_to_hours("2:00:36.0").unwrap() - 2.01).abs() < 1e-12);
    }

    #[test]
    fn clock_time_rejects_malformed_tokens() {
        assert!(matches!(clock_to_hours("bad"), Err(ParseError::InvalidTime(_))));
        assert!(clock_to_hours("1:30").is_err());
        assert!(clock_to_hours("1.5:00:00").is_err());
        assert!(clock_to_hours("1:xx:00").is_err());
    }

    #[test]
    fn float_prefix_reads_leading_number() {
        assert_eq!(float_prefix("28.5"), Some(28.5));
        assert_eq!(float_prefix("  -3.25abc"), Some(-3.25));
        assert_eq!(float_prefix("1e2x"), Some(100.0));
        assert_eq!(float_prefix("7e"), Some(7.0));
        assert_eq!(float_prefix(".5"), Some(0.5));
        assert_eq!(float_prefix("abc"), None);
        assert_eq!(float_prefix("-"), None);
        assert_eq!(float_prefix("."), None);
    }

    #[test]
    fn clock_temperature_defaults_to_zero() {
        let sample = parse_line(TimeFormat::Clock, "0:10:00,warm\n").unwrap();
        assert_eq!(sample.temperature, 0.0);
    }

    #[test]
    fn seconds_format_needs_numbers_in_both_fields() {
        assert_eq!(
            parse_line(TimeFormat::Seconds, "12.5,30.25").unwrap(),
            Sample::new(12.5, 30.25)
        );
        assert!(matches!(
            parse_line(TimeFormat::Seconds, "12.5,warm"),
            Err(ParseError::InvalidNumber { field: "temperature", .. })
        ));
        assert!(matches!(
            parse_line(TimeFormat::Seconds, "soon,30"),
            Err(ParseError::InvalidNumber { field: "time", .. })
        ));
    }

    #[test]
    fn seconds_time_must_end_at_comma() {
        assert!(matches!(
            parse_line(TimeFormat::Seconds, "12.5 ,30"),
            Err(ParseError::InvalidNumber { field: "time", .. })
        ));
        assert!(parse_line(TimeFormat::Seconds, "12.5s,30").is_err());
        assert_eq!(
            parse_line(TimeFormat::Seconds, "  12.5,30").unwrap(),
            Sample::new(12.5, 30.0)
        );
    }

    #[test]
    fn seconds_temperature_reads_numeric_prefix() {
        assert_eq!(
            parse_line(TimeFormat::Seconds, "12.5, 30abc").unwrap(),
            Sample::new(12.5, 30.0)
        );
        assert_eq!(
            parse_line(TimeFormat::Seconds, "1,0.0,30.0,31.0").unwrap(),
            Sample::new(1.0, 0.0)
        );
    }

    #[test]
    fn scan_float_returns_remainder() {
        assert_eq!(scan_float(" 4.5 rest"), Some((4.5, " rest")));
        assert_eq!(scan_float("7"), Some((7.0, "")));
        assert_eq!(scan_float("x7"), None);
    }

    #[test]
    fn blank_line_is_missing_time() {
        assert_eq!(
            parse_line(TimeFormat::Clock, ""),
            Err(ParseError::MissingField("time"))
        );
        assert_eq!(
            parse_line(TimeFormat::Seconds, "\r\n"),
            Err(ParseError::MissingField("time"))
        );
    }

    #[test]
    fn missing_temperature_is_rejected() {
        assert_eq!(
            parse_line(TimeFormat::Clock, "0:10:00"),
            Err(ParseError::MissingField("temperature"))
        );
        assert_eq!(
            parse_line(TimeFormat::Clock, "0:10:00,"),
            Err(ParseError::MissingField("temperature"))
        );
    }

    #[test]
    fn bad_time_is_rejected() {
        assert!(matches!(
            parse_line(TimeFormat::Clock, "bad,20.5"),
            Err(ParseError::InvalidTime(_))
        ));
    }
}
