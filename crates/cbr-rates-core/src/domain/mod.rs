//! # Domain Models
//!
//! Types describing the daily rate snapshot published by the source.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Currency`] | One quoted currency with its raw value and nominal |
//! | [`Document`] | The whole snapshot for one calendar day |
//! | [`RateDate`] | Day-resolution request date |
//! | [`OutputForm`] | Representation requested from the resolver |
//! | [`RateValue`] | A resolved value in one of those representations |
//!
//! ## Value normalization
//!
//! Values are quoted with a comma decimal separator and per `nominal` units
//! (e.g. per 100 JPY). [`Currency`] converts them:
//!
//! ```rust
//! use cbr_rates_core::Currency;
//! use rust_decimal::Decimal;
//!
//! let yen = Currency {
//!     id: String::from("R01820"),
//!     num_code: 392,
//!     char_code: String::from("JPY"),
//!     nominal: 100,
//!     name: String::from("Japanese Yen"),
//!     value: String::from("61,2153"),
//! };
//!
//! assert_eq!(yen.value_string(), "61.2153");
//! assert_eq!(yen.value_decimal().unwrap(), Decimal::new(612153, 6));
//! ```

mod currency;
mod document;
mod rate_date;
mod value;

pub use currency::Currency;
pub use document::Document;
pub use rate_date::RateDate;
pub use value::{normalize_separator, OutputForm, RateValue};
