//! In-memory, date-keyed cache of parsed rate documents.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use tokio::sync::{Mutex, OnceCell};

use crate::fetcher::DocumentFetcher;
use crate::{Document, RateDate, RateError};

type Slot = Arc<OnceCell<Arc<Document>>>;

/// Append-only store of daily documents, shared across callers.
///
/// Each date owns a single-initialization slot: concurrent misses on the same
/// date wait for one in-flight fetch instead of issuing their own, and the
/// first successfully parsed document is the only one ever stored for that
/// date. A failed fetch leaves the slot empty so a later call can try again.
#[derive(Debug, Default)]
pub struct RateCache {
    slots: Mutex<HashMap<RateDate, Slot>>,
    hits: AtomicU64,
}

impl RateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by clients that are not given their own.
    pub fn shared() -> Arc<RateCache> {
        static SHARED: OnceLock<Arc<RateCache>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(RateCache::new())).clone()
    }

    /// Return the document for `date`, fetching it when needed.
    ///
    /// - `use_cache` with a stored document: returned as is, hit counter incremented.
    /// - `use_cache` without one: fetched once, stored, returned.
    /// - `!use_cache`: fetched, never read from or written to the store.
    pub async fn resolve(
        &self,
        date: RateDate,
        use_cache: bool,
        fetcher: &DocumentFetcher,
    ) -> Result<Arc<Document>, RateError> {
        if !use_cache {
            return fetcher.fetch(date).await.map(Arc::new);
        }

        let slot = {
            let mut slots = self.slots.lock().await;
            slots.entry(date).or_default().clone()
        };

        if let Some(document) = slot.get() {
            self.record_hit(date);
            return Ok(document.clone());
        }

        let fetched_here = AtomicBool::new(false);
        let flag = &fetched_here;
        let outcome = slot
            .get_or_try_init(|| async move {
                flag.store(true, Ordering::SeqCst);
                tracing::debug!(%date, "rate cache miss");
                fetcher.fetch(date).await.map(Arc::new)
            })
            .await
            .cloned();

        let document = match outcome {
            Ok(document) => document,
            Err(error) => {
                self.release_empty_slot(date, &slot).await;
                return Err(error);
            }
        };

        if fetched_here.load(Ordering::SeqCst) {
            // The slot may have been released by a failed caller while this
            // one was fetching into it.
            let mut slots = self.slots.lock().await;
            slots.entry(date).or_insert_with(|| slot.clone());
        } else {
            // Joined a fetch started by another caller.
            self.record_hit(date);
        }
        Ok(document)
    }

    /// Number of times a stored document was served instead of fetched.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        let slots = self.slots.lock().await;
        slots.values().filter(|slot| slot.initialized()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn contains(&self, date: RateDate) -> bool {
        let slots = self.slots.lock().await;
        slots.get(&date).is_some_and(|slot| slot.initialized())
    }

    /// The stored document for `date`, without fetching or counting a hit.
    pub async fn peek(&self, date: RateDate) -> Option<Arc<Document>> {
        let slots = self.slots.lock().await;
        slots.get(&date).and_then(|slot| slot.get().cloned())
    }

    /// Drop the slot for `date` if it is still `slot` and holds nothing.
    async fn release_empty_slot(&self, date: RateDate, slot: &Slot) {
        let mut slots = self.slots.lock().await;
        let is_same_empty_slot = slots
            .get(&date)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && !current.initialized());
        if is_same_empty_slot {
            slots.remove(&date);
        }
    }

    fn record_hit(&self, date: RateDate) {
        let hits = self.hits.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(%date, hits, "rate cache hit");
    }
}
