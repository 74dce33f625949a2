//! Behavior-driven tests for rate resolution
//!
//! These tests verify WHAT a consumer gets back for a currency and a day,
//! across the float, decimal and string representations.

use std::sync::Arc;

use cbr_rates_tests::{
    isolated_client, ok_transport, trading_day, DocumentFetcher, OutputForm, RateCache,
    RateResolver, RateValue,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Rate Resolution: Output Forms
// =============================================================================

#[tokio::test]
async fn when_currency_is_quoted_per_hundred_units_rate_is_per_unit() {
    // Given: CNY quoted as 12345,4220 per 100 units
    let client = isolated_client(ok_transport());

    // When: The float and decimal rates are requested
    let float = client.rate("CNY", trading_day()).await.expect("quoted");
    let decimal = client
        .rate_decimal("CNY", trading_day())
        .await
        .expect("quoted");

    // Then: Both are divided by the nominal
    assert!((float - 123.45422).abs() < 1e-12);
    assert_eq!(decimal, Decimal::new(123454220, 6));
}

#[tokio::test]
async fn when_raw_forms_are_requested_nominal_is_not_applied() {
    // Given: A resolver over the daily document
    let resolver = RateResolver::new(
        Arc::new(RateCache::new()),
        DocumentFetcher::new(ok_transport()),
    );

    // When: Raw forms are requested
    let float_raw = resolver
        .rate("CNY", trading_day(), true, OutputForm::FloatRaw)
        .await
        .expect("quoted");
    let decimal_raw = resolver
        .rate("CNY", trading_day(), true, OutputForm::DecimalRaw)
        .await
        .expect("quoted");

    // Then: The quoted value is returned as is
    assert_eq!(float_raw, RateValue::Float(12345.422));
    assert_eq!(decimal_raw, RateValue::Decimal(dec!(12345.4220)));
    assert_eq!(
        decimal_raw.as_decimal().map(|value| value.mantissa()),
        Some(123454220)
    );
}

#[tokio::test]
async fn when_string_form_is_requested_only_the_separator_changes() {
    // Given: USD quoted as 91,6359
    let client = isolated_client(ok_transport());

    // When: The string rate is requested
    let text = client
        .rate_string("USD", trading_day())
        .await
        .expect("quoted");

    // Then: The comma becomes a dot and nothing else changes
    assert_eq!(text, "91.6359");
}

#[tokio::test]
async fn when_string_rate_is_parsed_back_it_matches_itself() {
    // Given: Every currency of the day
    let client = isolated_client(ok_transport());
    let document = client.document(trading_day()).await.expect("fetched");

    for currency in &document.currencies {
        // When: The canonical string is parsed as a decimal
        let parsed = currency.value_decimal_raw().expect("valid value");

        // Then: Formatting it again yields the same string
        assert_eq!(parsed.to_string(), currency.value_string());
    }
}

// =============================================================================
// Rate Resolution: Currency Metadata
// =============================================================================

#[tokio::test]
async fn when_currency_info_is_requested_cyrillic_names_are_decoded() {
    // Given: The source sends windows-1251 text
    let client = isolated_client(ok_transport());

    // When: The CNY record is requested
    let currency = client
        .currency_info("CNY", trading_day())
        .await
        .expect("quoted");

    // Then: Every field is mapped and the name is proper UTF-8
    assert_eq!(currency.id, "R01375");
    assert_eq!(currency.num_code, 156);
    assert_eq!(currency.char_code, "CNY");
    assert_eq!(currency.nominal, 100);
    assert_eq!(currency.name, "Китайский юань");
    assert_eq!(currency.value, "12345,4220");
}

#[tokio::test]
async fn when_leading_zero_numeric_code_is_sent_it_parses_as_number() {
    // Given: AUD carries NumCode 036
    let client = isolated_client(ok_transport());

    // When: Its record is requested
    let currency = client
        .currency_info("AUD", trading_day())
        .await
        .expect("quoted");

    // Then: The numeric code is 36
    assert_eq!(currency.num_code, 36);
}

#[tokio::test]
async fn when_document_is_requested_currencies_keep_source_order() {
    // Given: A client over the daily document
    let client = isolated_client(ok_transport());

    // When: The whole snapshot is requested
    let document = client.document(trading_day()).await.expect("fetched");

    // Then: Source order and the snapshot date are preserved
    assert_eq!(document.char_codes(), vec!["AUD", "USD", "CNY"]);
    assert_eq!(document.parsed_date().map(|d| d.day()), Some(2));
}
