//! Behavior-driven tests for the daily document cache
//!
//! These tests verify HOW the cache counts hits, grows, and shares fetches
//! between callers.

use std::sync::Arc;
use std::time::Duration;

use cbr_rates_tests::{
    daily_document_1251, isolated_client, next_trading_day, ok_transport, trading_day,
    DocumentFetcher, RateCache, StaticHttpClient,
};

// =============================================================================
// Cache: Enabled
// =============================================================================

#[tokio::test]
async fn when_same_day_is_resolved_twice_second_call_is_a_hit() {
    // Given: A client with caching enabled
    let transport = ok_transport();
    let client = isolated_client(transport.clone());

    // When: The same day is resolved twice
    client.rate("USD", trading_day()).await.expect("quoted");
    let size_after_first = client.cache().len().await;
    client.rate("CNY", trading_day()).await.expect("quoted");

    // Then: The second call hits and the cache does not grow
    assert_eq!(client.cache().hits(), 1);
    assert_eq!(client.cache().len().await, size_after_first);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn when_new_day_is_resolved_cache_grows_by_one_without_a_hit() {
    // Given: A cache already holding one day
    let client = isolated_client(ok_transport());
    client.rate("USD", trading_day()).await.expect("quoted");
    let hits_before = client.cache().hits();
    let size_before = client.cache().len().await;

    // When: A previously unseen day is resolved
    client.rate("USD", next_trading_day()).await.expect("quoted");

    // Then: Exactly one entry is added and the hit counter is unchanged
    assert_eq!(client.cache().len().await, size_before + 1);
    assert_eq!(client.cache().hits(), hits_before);
}

// =============================================================================
// Cache: Disabled
// =============================================================================

#[tokio::test]
async fn when_caching_is_disabled_nothing_is_counted_or_stored() {
    // Given: A client with caching disabled
    let transport = ok_transport();
    let mut client = isolated_client(transport.clone());
    client.set_use_cache(false);

    // When: The same day is resolved twice
    client.rate("USD", trading_day()).await.expect("quoted");
    client.rate("USD", trading_day()).await.expect("quoted");

    // Then: Every call fetches and the cache stays untouched
    assert_eq!(client.cache().hits(), 0);
    assert!(client.cache().is_empty().await);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn when_caching_is_disabled_after_use_stored_entry_is_not_disturbed() {
    // Given: A day cached by an earlier call
    let transport = ok_transport();
    let mut client = isolated_client(transport.clone());
    client.rate("USD", trading_day()).await.expect("quoted");
    let stored = client.cache().peek(trading_day()).await.expect("cached");

    // When: The cache is bypassed for the same day
    client.set_use_cache(false);
    client.rate("USD", trading_day()).await.expect("quoted");

    // Then: The stored document is the same instance and no hit was counted
    let still_stored = client.cache().peek(trading_day()).await.expect("cached");
    assert!(Arc::ptr_eq(&stored, &still_stored));
    assert_eq!(client.cache().hits(), 0);
    assert_eq!(client.cache().len().await, 1);
}

// =============================================================================
// Cache: Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn when_many_callers_miss_the_same_day_only_one_fetch_happens() {
    // Given: A slow source and a shared cache
    let transport = Arc::new(
        StaticHttpClient::ok(daily_document_1251()).with_delay(Duration::from_millis(100)),
    );
    let fetcher = Arc::new(DocumentFetcher::new(transport.clone()));
    let cache = Arc::new(RateCache::new());

    // When: Eight tasks resolve the same day at once
    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = cache.clone();
        let fetcher = fetcher.clone();
        handles.push(tokio::spawn(async move {
            cache.resolve(trading_day(), true, &fetcher).await
        }));
    }

    let mut documents = Vec::new();
    for handle in handles {
        documents.push(handle.await.expect("task joined").expect("resolved"));
    }

    // Then: One fetch served everyone and one document is stored
    assert_eq!(transport.calls(), 1);
    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.hits(), 7);
    assert!(documents.iter().all(|doc| Arc::ptr_eq(doc, &documents[0])));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn when_callers_miss_different_days_each_day_is_fetched_once() {
    // Given: A shared cache
    let transport = ok_transport();
    let fetcher = Arc::new(DocumentFetcher::new(transport.clone()));
    let cache = Arc::new(RateCache::new());

    // When: Two days are resolved concurrently, twice each
    let mut handles = Vec::new();
    for day in [trading_day(), next_trading_day(), trading_day(), next_trading_day()] {
        let cache = cache.clone();
        let fetcher = fetcher.clone();
        handles.push(tokio::spawn(async move {
            cache.resolve(day, true, &fetcher).await
        }));
    }
    for handle in handles {
        handle.await.expect("task joined").expect("resolved");
    }

    // Then: Two documents are stored and two fetches happened
    assert_eq!(cache.len().await, 2);
    assert_eq!(transport.calls(), 2);
    assert_eq!(cache.hits(), 2);
}
