//! Fetcher configuration with environment overrides.

/// Daily rates endpoint (English currency names).
pub const DEFAULT_BASE_URL: &str = "http://www.cbr.ru/scripts/XML_daily_eng.asp";

/// Timeout budget handed to the transport for each request.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

pub const BASE_URL_ENV: &str = "CBR_RATES_BASE_URL";
pub const TIMEOUT_MS_ENV: &str = "CBR_RATES_TIMEOUT_MS";

/// Where and how the daily document is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl FetcherConfig {
    /// Defaults overridden by `CBR_RATES_BASE_URL` and `CBR_RATES_TIMEOUT_MS`.
    ///
    /// Empty or unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup(BASE_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.base_url);

        let timeout_ms = lookup(TIMEOUT_MS_ENV)
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(defaults.timeout_ms);

        Self {
            base_url,
            timeout_ms,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}
