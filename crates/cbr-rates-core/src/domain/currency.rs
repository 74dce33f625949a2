use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::value::{normalize_separator, validate_numeral, OutputForm, RateValue};
use crate::{RateError, ValueFormatError};

/// One line item of a daily rate document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Source-internal identifier, e.g. `R01235`.
    pub id: String,
    /// ISO 4217 numeric code.
    pub num_code: u32,
    /// ISO 4217 alphabetic code.
    pub char_code: String,
    /// Number of units the value is quoted per.
    pub nominal: u32,
    pub name: String,
    /// Value as quoted by the source; either `,` or `.` separates decimals.
    pub value: String,
}

impl Currency {
    /// Quoted value with a dot decimal separator, otherwise untouched.
    pub fn value_string(&self) -> String {
        normalize_separator(&self.value)
    }

    /// Quoted value as `f64`, without nominal correction.
    pub fn value_float_raw(&self) -> Result<f64, RateError> {
        let normalized = self.checked_value()?;
        normalized
            .parse::<f64>()
            .map_err(|_| ValueFormatError::new(normalized, "not a float").into())
    }

    /// Per-unit value as `f64`.
    pub fn value_float(&self) -> Result<f64, RateError> {
        let raw = self.value_float_raw()?;
        let nominal = self.checked_nominal()?;
        Ok(raw / f64::from(nominal))
    }

    /// Quoted value as an exact decimal, without nominal correction.
    ///
    /// Values that would need rounding to fit 28 significant digits are
    /// rejected rather than silently altered.
    pub fn value_decimal_raw(&self) -> Result<Decimal, RateError> {
        let normalized = self.checked_value()?;
        Decimal::from_str_exact(&normalized).map_err(|_| {
            ValueFormatError::new(normalized, "not exactly representable as decimal").into()
        })
    }

    /// Per-unit value as an exact decimal.
    pub fn value_decimal(&self) -> Result<Decimal, RateError> {
        let raw = self.value_decimal_raw()?;
        let nominal = self.checked_nominal()?;
        Ok(raw / Decimal::from(nominal))
    }

    /// Convert the value into the requested representation.
    pub fn value_as(&self, form: OutputForm) -> Result<RateValue, RateError> {
        Ok(match form {
            OutputForm::Float => RateValue::Float(self.value_float()?),
            OutputForm::FloatRaw => RateValue::Float(self.value_float_raw()?),
            OutputForm::Decimal => RateValue::Decimal(self.value_decimal()?),
            OutputForm::DecimalRaw => RateValue::Decimal(self.value_decimal_raw()?),
            OutputForm::Text => RateValue::Text(self.value_string()),
        })
    }

    fn checked_value(&self) -> Result<String, ValueFormatError> {
        let normalized = self.value_string();
        validate_numeral(&normalized)?;
        Ok(normalized)
    }

    fn checked_nominal(&self) -> Result<u32, RateError> {
        if self.nominal == 0 {
            return Err(RateError::ZeroNominal {
                code: self.char_code.clone(),
            });
        }
        Ok(self.nominal)
    }
}
