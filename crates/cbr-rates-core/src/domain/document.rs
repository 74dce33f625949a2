use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use super::currency::Currency;

/// One trading day's snapshot of every quoted currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Snapshot date as carried by the source (`DD.MM.YYYY`).
    pub date: String,
    /// Market name attribute, when the source sends one.
    pub name: Option<String>,
    /// Currencies in source order.
    pub currencies: Vec<Currency>,
}

impl Document {
    /// First currency whose alphabetic code equals `char_code` exactly.
    ///
    /// The comparison is case-sensitive. If the source lists a code twice the
    /// earliest entry wins.
    pub fn find(&self, char_code: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|currency| currency.char_code == char_code)
    }

    pub fn char_codes(&self) -> Vec<&str> {
        self.currencies
            .iter()
            .map(|currency| currency.char_code.as_str())
            .collect()
    }

    /// The snapshot date, if the `Date` attribute is a valid `DD.MM.YYYY` date.
    pub fn parsed_date(&self) -> Option<Date> {
        Date::parse(&self.date, format_description!("[day].[month].[year]")).ok()
    }
}
