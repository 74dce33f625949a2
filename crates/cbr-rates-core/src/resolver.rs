//! Currency lookup on top of the cached daily documents.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::cache::RateCache;
use crate::fetcher::DocumentFetcher;
use crate::observer::ResolveObserver;
use crate::{Currency, Document, OutputForm, RateDate, RateError, RateValue};

/// Resolves a currency code and date to a value in the requested form.
#[derive(Clone)]
pub struct RateResolver {
    cache: Arc<RateCache>,
    fetcher: DocumentFetcher,
    observer: Option<Arc<dyn ResolveObserver>>,
}

impl Debug for RateResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateResolver")
            .field("cache", &self.cache)
            .field("fetcher", &self.fetcher)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl RateResolver {
    pub fn new(cache: Arc<RateCache>, fetcher: DocumentFetcher) -> Self {
        Self {
            cache,
            fetcher,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_cache(mut self, cache: Arc<RateCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<RateCache> {
        &self.cache
    }

    pub fn fetcher(&self) -> &DocumentFetcher {
        &self.fetcher
    }

    pub fn fetcher_mut(&mut self) -> &mut DocumentFetcher {
        &mut self.fetcher
    }

    /// The whole daily snapshot for `date`.
    pub async fn document(
        &self,
        date: impl Into<RateDate>,
        use_cache: bool,
    ) -> Result<Arc<Document>, RateError> {
        self.cache
            .resolve(date.into(), use_cache, &self.fetcher)
            .await
    }

    /// The currency entry whose char code equals `code` exactly.
    ///
    /// Fails with [`RateError::UnknownCurrency`] when the document was
    /// retrieved but does not list `code`.
    pub async fn currency(
        &self,
        code: &str,
        date: impl Into<RateDate>,
        use_cache: bool,
    ) -> Result<Currency, RateError> {
        let date = date.into();
        self.notify(|observer| observer.on_request(code, date, None));
        let result = self.lookup(code, date, use_cache).await;
        self.report(code, date, &result);
        result
    }

    /// The value of `code` on `date` in the requested form.
    pub async fn rate(
        &self,
        code: &str,
        date: impl Into<RateDate>,
        use_cache: bool,
        form: OutputForm,
    ) -> Result<RateValue, RateError> {
        self.convert(code, date, use_cache, form, |currency| currency.value_as(form))
            .await
    }

    /// Look up `code` and convert it with `convert`, reporting `form` to the
    /// observer. Conversion failures are reported like lookup failures.
    pub async fn convert<T>(
        &self,
        code: &str,
        date: impl Into<RateDate>,
        use_cache: bool,
        form: OutputForm,
        convert: impl FnOnce(&Currency) -> Result<T, RateError>,
    ) -> Result<T, RateError> {
        let date = date.into();
        self.notify(|observer| observer.on_request(code, date, Some(form)));
        let result = match self.lookup(code, date, use_cache).await {
            Ok(currency) => convert(&currency),
            Err(error) => Err(error),
        };
        self.report(code, date, &result);
        result
    }

    async fn lookup(
        &self,
        code: &str,
        date: RateDate,
        use_cache: bool,
    ) -> Result<Currency, RateError> {
        let document = self.cache.resolve(date, use_cache, &self.fetcher).await?;
        document
            .find(code)
            .cloned()
            .ok_or_else(|| RateError::UnknownCurrency {
                code: code.to_string(),
            })
    }

    fn notify(&self, event: impl FnOnce(&dyn ResolveObserver)) {
        if let Some(observer) = &self.observer {
            event(observer.as_ref());
        }
    }

    fn report<T>(&self, code: &str, date: RateDate, result: &Result<T, RateError>) {
        match result {
            Ok(_) => self.notify(|observer| observer.on_resolved(code, date)),
            Err(error) => self.notify(|observer| observer.on_error(code, date, error)),
        }
    }
}
