use thiserror::Error;

use crate::http_client::HttpError;

/// A raw currency value that is not a plain decimal numeral.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid currency value '{value}': {reason}")]
pub struct ValueFormatError {
    value: String,
    reason: &'static str,
}

impl ValueFormatError {
    pub(crate) fn new(value: impl Into<String>, reason: &'static str) -> Self {
        Self {
            value: value.into(),
            reason,
        }
    }

    /// The offending value, after comma-to-dot normalization.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Charset or structural failure while decoding a daily rate document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown charset: {charset}")]
    UnsupportedCharset { charset: String },

    #[error("document is not valid {charset} text")]
    InvalidText { charset: &'static str },

    #[error("malformed rate document: {message}")]
    Malformed { message: String },
}

/// Validation errors for user-supplied request parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
}

/// Error classification used by callers that branch on failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateErrorKind {
    Configuration,
    Transport,
    RemoteStatus,
    Decode,
    ValueFormat,
    DataIntegrity,
    UnknownCurrency,
}

/// Every failure the rate-resolution pipeline can surface.
///
/// Errors reach the caller unmodified; nothing is retried or replaced with a
/// fallback value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("no http client configured")]
    MissingTransport,

    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("status code: {status}")]
    RemoteStatus { status: u16 },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    ValueFormat(#[from] ValueFormatError),

    #[error("currency {code} has zero nominal")]
    ZeroNominal { code: String },

    #[error("unknown currency: {code}")]
    UnknownCurrency { code: String },
}

impl RateError {
    pub const fn kind(&self) -> RateErrorKind {
        match self {
            Self::MissingTransport => RateErrorKind::Configuration,
            Self::Transport(_) => RateErrorKind::Transport,
            Self::RemoteStatus { .. } => RateErrorKind::RemoteStatus,
            Self::Decode(_) => RateErrorKind::Decode,
            Self::ValueFormat(_) => RateErrorKind::ValueFormat,
            Self::ZeroNominal { .. } => RateErrorKind::DataIntegrity,
            Self::UnknownCurrency { .. } => RateErrorKind::UnknownCurrency,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self.kind() {
            RateErrorKind::Configuration => "rates.configuration",
            RateErrorKind::Transport => "rates.transport",
            RateErrorKind::RemoteStatus => "rates.remote_status",
            RateErrorKind::Decode => "rates.decode",
            RateErrorKind::ValueFormat => "rates.value_format",
            RateErrorKind::DataIntegrity => "rates.data_integrity",
            RateErrorKind::UnknownCurrency => "rates.unknown_currency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_status_message_carries_code() {
        let error = RateError::RemoteStatus { status: 500 };
        assert_eq!(error.to_string(), "status code: 500");
        assert_eq!(error.code(), "rates.remote_status");
    }

    #[test]
    fn transport_error_message_is_passed_through() {
        let error = RateError::from(HttpError::new("error"));
        assert_eq!(error.to_string(), "error");
        assert_eq!(error.kind(), RateErrorKind::Transport);
    }

    #[test]
    fn zero_nominal_is_not_a_format_error() {
        let error = RateError::ZeroNominal {
            code: String::from("JPY"),
        };
        assert_eq!(error.kind(), RateErrorKind::DataIntegrity);
        assert_ne!(error.kind(), RateErrorKind::ValueFormat);
    }
}
