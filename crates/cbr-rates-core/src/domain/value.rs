use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ValueFormatError;

/// Replace every comma decimal separator with a dot.
pub fn normalize_separator(raw: &str) -> String {
    raw.replace(',', ".")
}

/// Check that a dot-separated value is a plain decimal numeral.
///
/// Accepts an optional sign, at least one integer digit and an optional
/// fractional part. Exponents, `inf`/`NaN`, digit separators and whitespace
/// are rejected so that the float and decimal parsers agree on every input.
pub(crate) fn validate_numeral(value: &str) -> Result<(), ValueFormatError> {
    let unsigned = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    if integer.is_empty() {
        return Err(ValueFormatError::new(value, "missing integer digits"));
    }
    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValueFormatError::new(value, "unexpected character"));
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() {
            return Err(ValueFormatError::new(value, "missing fractional digits"));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueFormatError::new(value, "unexpected character"));
        }
    }
    Ok(())
}

/// Representation requested from the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputForm {
    /// `f64` divided by the nominal.
    Float,
    /// `f64` as quoted, per nominal units.
    FloatRaw,
    /// Decimal divided by the nominal.
    Decimal,
    /// Decimal as quoted, per nominal units.
    DecimalRaw,
    /// Quoted string with a dot separator.
    Text,
}

impl OutputForm {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::FloatRaw => "float_raw",
            Self::Decimal => "decimal",
            Self::DecimalRaw => "decimal_raw",
            Self::Text => "text",
        }
    }
}

impl Display for OutputForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved rate in the form it was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateValue {
    Float(f64),
    Decimal(Decimal),
    Text(String),
}

impl RateValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for RateValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}
