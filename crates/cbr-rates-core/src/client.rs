//! Consumer-facing client for daily CBR rates.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::cache::RateCache;
use crate::config::FetcherConfig;
use crate::fetcher::DocumentFetcher;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::observer::ResolveObserver;
use crate::resolver::RateResolver;
use crate::{Currency, Document, OutputForm, RateDate, RateError};

/// Rate client with a cache toggle and a replaceable transport.
///
/// ```rust,ignore
/// use cbr_rates_core::{Client, RateDate};
///
/// let client = Client::new();
/// let usd = client.rate("USD", RateDate::today()).await?;
/// let usd_exact = client.rate_decimal("USD", RateDate::today()).await?;
/// let usd_text = client.rate_string("USD", RateDate::today()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    resolver: RateResolver,
    use_cache: bool,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Reqwest transport, process-wide cache, caching enabled.
    pub fn new() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            resolver: RateResolver::new(RateCache::shared(), DocumentFetcher::new(http_client)),
            use_cache: true,
        }
    }

    /// Use a dedicated cache instead of the process-wide one.
    pub fn with_cache(self, cache: Arc<RateCache>) -> Self {
        Self {
            resolver: self.resolver.with_cache(cache),
            ..self
        }
    }

    pub fn with_config(mut self, config: FetcherConfig) -> Self {
        self.resolver.fetcher_mut().set_config(config);
        self
    }

    pub fn with_observer(self, observer: Arc<dyn ResolveObserver>) -> Self {
        Self {
            resolver: self.resolver.with_observer(observer),
            ..self
        }
    }

    /// Replace the transport; `None` makes every uncached call fail with
    /// [`RateError::MissingTransport`].
    pub fn set_http_client(&mut self, http_client: Option<Arc<dyn HttpClient>>) {
        self.resolver.fetcher_mut().set_http_client(http_client);
    }

    pub fn set_use_cache(&mut self, use_cache: bool) {
        self.use_cache = use_cache;
    }

    pub const fn use_cache(&self) -> bool {
        self.use_cache
    }

    pub fn cache(&self) -> &Arc<RateCache> {
        self.resolver.cache()
    }

    /// Per-unit rate as `f64`.
    pub async fn rate(&self, code: &str, date: impl Into<RateDate>) -> Result<f64, RateError> {
        self.resolver
            .convert(code, date, self.use_cache, OutputForm::Float, Currency::value_float)
            .await
    }

    /// Per-unit rate as an exact decimal.
    pub async fn rate_decimal(
        &self,
        code: &str,
        date: impl Into<RateDate>,
    ) -> Result<Decimal, RateError> {
        self.resolver
            .convert(
                code,
                date,
                self.use_cache,
                OutputForm::Decimal,
                Currency::value_decimal,
            )
            .await
    }

    /// Quoted rate string with a dot decimal separator.
    pub async fn rate_string(
        &self,
        code: &str,
        date: impl Into<RateDate>,
    ) -> Result<String, RateError> {
        self.resolver
            .convert(code, date, self.use_cache, OutputForm::Text, |currency| {
                Ok(currency.value_string())
            })
            .await
    }

    /// The raw currency record.
    pub async fn currency_info(
        &self,
        code: &str,
        date: impl Into<RateDate>,
    ) -> Result<Currency, RateError> {
        self.resolver.currency(code, date, self.use_cache).await
    }

    /// Every currency quoted on `date`.
    pub async fn document(&self, date: impl Into<RateDate>) -> Result<Arc<Document>, RateError> {
        self.resolver.document(date, self.use_cache).await
    }

    pub fn resolver(&self) -> &RateResolver {
        &self.resolver
    }
}
