// src/domain/decimal.rs
use thiserror::Error;

/// Why a user-entered number could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalParseError {
    #[error("empty number")]
    Empty,
    #[error("not a number: {0}")]
    Invalid(String),
}

/// Parse a number typed into the add-form.
///
/// Whitespace anywhere in the input is dropped (thousands separators) and the
/// first comma is read as the decimal separator. Infinities and NaN are
/// rejected.
pub fn parse_decimal(raw: &str) -> Result<f64, DecimalParseError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(DecimalParseError::Empty);
    }

    let dotted = compact.replacen(',', ".", 1);
    match dotted.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(DecimalParseError::Invalid(raw.to_string())),
    }
}

/// Canonical stored form: decimal point, exactly three fractional digits.
/// Anything unparseable becomes the empty string.
pub fn normalize_decimal(raw: &str) -> String {
    parse_decimal(raw).map(fixed3).unwrap_or_default()
}

/// Render a stored value for people: three fractional digits, comma separator.
/// Values that do not parse are returned untouched; a blank value reads as 0.
pub fn display_decimal(stored: &str) -> String {
    if stored.is_empty() {
        return String::new();
    }

    let trimmed = stored.trim();
    if trimmed.is_empty() {
        return fixed3(0.0).replacen('.', ",", 1);
    }

    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => fixed3(n).replacen('.', ",", 1),
        _ => stored.to_string(),
    }
}

/// Three fractional digits, an exact binary tie rounding away from zero.
fn fixed3(n: f64) -> String {
    // -0.0 prints as "-0.000"
    let n = if n == 0.0 { 0.0 } else { n };

    // `{:.3}` sends ties to even. A tie at the third digit is only exact for
    // multiples of 1/16, where `abs * 1000.0` is exact too.
    let abs = n.abs();
    if (abs * 16.0).fract() == 0.0 {
        let scaled = abs * 1000.0;
        if scaled.fract() == 0.5 {
            let m = scaled.ceil() as u64;
            let sign = if n < 0.0 { "-" } else { "" };
            return format!("{sign}{}.{:03}", m / 1000, m % 1000);
        }
    }

    format!("{n:.3}")
}
