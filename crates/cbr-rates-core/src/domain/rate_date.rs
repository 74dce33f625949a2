use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::ValidationError;

/// Calendar day a rate is requested for.
///
/// Time of day is discarded on construction and no timezone conversion takes
/// place: an `OffsetDateTime` keeps the day it has in its own offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RateDate(Date);

impl RateDate {
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Current day in UTC.
    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    /// Parse an ISO `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_string(),
            })
    }

    pub const fn date(self) -> Date {
        self.0
    }

    /// The `date_req` query value expected by the source (`DD/MM/YYYY`).
    pub fn query_param(self) -> String {
        self.0
            .format(format_description!("[day]/[month]/[year]"))
            .unwrap_or_else(|_| {
                format!(
                    "{:02}/{:02}/{:04}",
                    self.0.day(),
                    u8::from(self.0.month()),
                    self.0.year()
                )
            })
    }
}

impl From<Date> for RateDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl From<OffsetDateTime> for RateDate {
    fn from(value: OffsetDateTime) -> Self {
        Self(value.date())
    }
}

impl From<PrimitiveDateTime> for RateDate {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value.date())
    }
}

impl TryFrom<String> for RateDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RateDate> for String {
    fn from(value: RateDate) -> Self {
        value.to_string()
    }
}

impl Display for RateDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}
