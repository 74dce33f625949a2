//! # cbr-rates core
//!
//! Daily foreign-exchange rates published by the Central Bank of Russia.
//!
//! ## Overview
//!
//! This crate resolves the rate of a currency on a calendar day:
//!
//! - **Document retrieval** through an injectable [`HttpClient`] transport
//! - **Charset-aware decoding** of the `windows-1251` XML rate document
//! - **Date-keyed caching** with single-flight fetches per day
//! - **Value normalization** to `f64`, exact [`rust_decimal::Decimal`], or a
//!   dot-separated string, with nominal correction
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Process-wide, append-only document cache |
//! | [`client`] | Consumer-facing client |
//! | [`config`] | Endpoint and timeout configuration |
//! | [`domain`] | Currency, document and date types |
//! | [`error`] | Error taxonomy |
//! | [`fetcher`] | Request building, charset decoding and XML parsing |
//! | [`http_client`] | Transport abstraction and implementations |
//! | [`observer`] | Optional resolution hook |
//! | [`resolver`] | Cache lookup, currency search and conversion |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cbr_rates_core::{Client, RateDate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new();
//!
//!     let usd = client.rate("USD", RateDate::today()).await?;
//!     println!("USD: {usd}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Client      │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  RateResolver   │────▶│ ResolveObserver  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │   RateCache     │────▶│ DocumentFetcher  │
//! └─────────────────┘     └────────┬─────────┘
//!                                  │
//!                                  ▼
//!                         ┌──────────────────┐
//!                         │   HttpClient     │
//!                         │ (reqwest/static) │
//!                         └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`RateError`]; nothing is retried or defaulted:
//!
//! ```rust
//! use cbr_rates_core::{RateError, RateErrorKind};
//!
//! fn describe(error: &RateError) -> &'static str {
//!     match error.kind() {
//!         RateErrorKind::UnknownCurrency => "not quoted on that day",
//!         RateErrorKind::RemoteStatus | RateErrorKind::Transport => "source unreachable",
//!         _ => "unusable data",
//!     }
//! }
//!
//! let error = RateError::UnknownCurrency { code: String::from("XXX") };
//! assert_eq!(describe(&error), "not quoted on that day");
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod observer;
pub mod resolver;

pub use cache::RateCache;

pub use client::Client;

pub use config::FetcherConfig;

pub use domain::{normalize_separator, Currency, Document, OutputForm, RateDate, RateValue};

pub use error::{DecodeError, RateError, RateErrorKind, ValidationError, ValueFormatError};

pub use fetcher::{parse_document, DocumentFetcher};

pub use http_client::{
    FailingHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
    StaticHttpClient,
};

pub use observer::{ResolveObserver, TracingObserver};

pub use resolver::RateResolver;
