use crate::foundation::error::{DrawtirError, DrawtirResult};

/// Display unit for [`format_time_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TimeUnit {
    /// Seconds with two decimals, e.g. `2.50s`.
    #[default]
    #[serde(rename = "s")]
    Seconds,
    /// Whole milliseconds, e.g. `500ms`.
    #[serde(rename = "ms")]
    Millis,
}

impl TimeUnit {
    /// Suffix appended by [`format_time_string`].
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Millis => "ms",
        }
    }
}

/// Parse an editor duration string into seconds.
///
/// `"2.5"` and `"2.5s"` are seconds, `"500ms"` is milliseconds. Only the leading numeric
/// portion is read, so trailing junk is ignored. Text without a numeric prefix yields `NaN`;
/// see [`try_parse_time_string`] for a strict variant.
pub fn parse_time_string(text: &str) -> f64 {
    let value = leading_number(text);
    if text.ends_with("ms") {
        value / 1000.0
    } else {
        value
    }
}

/// Strictly parse a duration string into non-negative, finite seconds.
///
/// Accepts `<number>`, `<number>s` and `<number>ms` with optional surrounding whitespace.
pub fn try_parse_time_string(text: &str) -> DrawtirResult<f64> {
    let trimmed = text.trim();
    let (number, scale) = if let Some(n) = trimmed.strip_suffix("ms") {
        (n, 1000.0)
    } else if let Some(n) = trimmed.strip_suffix('s') {
        (n, 1.0)
    } else {
        (trimmed, 1.0)
    };

    let value: f64 = number
        .trim_end()
        .parse()
        .map_err(|_| DrawtirError::parse(format!("malformed duration '{text}'")))?;
    if !value.is_finite() {
        return Err(DrawtirError::parse(format!(
            "duration '{text}' is not finite"
        )));
    }
    if value < 0.0 {
        return Err(DrawtirError::parse(format!("duration '{text}' is negative")));
    }
    Ok(value / scale)
}

/// Parse a duration string, treating anything [`try_parse_time_string`] rejects as zero.
pub fn parse_time_string_or_zero(text: &str) -> f64 {
    try_parse_time_string(text).unwrap_or(0.0)
}

/// Format seconds for display in the given unit.
///
/// Not an exact inverse of [`parse_time_string`] across units: `"500ms"` formats back as
/// `"0.50s"` in seconds.
pub fn format_time_string(seconds: f64, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Seconds => {
            if !seconds.is_finite() {
                return format!("{}{}", non_finite_text(seconds), unit.suffix());
            }
            format!("{}{}", to_fixed_2(positive_zero(seconds)), unit.suffix())
        }
        TimeUnit::Millis => {
            // Half-up rounding, matching the editor's display.
            let ms = (seconds * 1000.0 + 0.5).floor();
            if !ms.is_finite() {
                return format!("{}{}", non_finite_text(ms), unit.suffix());
            }
            format!("{}{}", positive_zero(ms), unit.suffix())
        }
    }
}

/// Two-decimal fixed notation with exact ties rounded away from zero.
///
/// `{:.2}` is exact except on ties, where it rounds to even. A tie needs `v` to be exactly
/// `k/100 + 0.005`, which a binary float can only hold when `v * 8` is an integer.
fn to_fixed_2(v: f64) -> String {
    let scaled = v * 100.0;
    if (v * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{v:.2}")
    }
}

fn positive_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

fn non_finite_text(v: f64) -> &'static str {
    if v.is_nan() {
        "NaN"
    } else if v > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// Longest decimal-literal prefix of `text` (after leading whitespace), or `NaN`.
fn leading_number(text: &str) -> f64 {
    let s = text.trim_start();
    let b = s.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if b[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&b[i..]);
    i += int_digits;

    if b.get(i) == Some(&b'.') {
        let frac_digits = count_digits(&b[i + 1..]);
        if frac_digits > 0 {
            i += 1 + frac_digits;
        } else if int_digits == 0 {
            return f64::NAN;
        }
    } else if int_digits == 0 {
        return f64::NAN;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&b[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    s[..i].parse().unwrap_or(f64::NAN)
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
