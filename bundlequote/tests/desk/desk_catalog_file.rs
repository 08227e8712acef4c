use std::io::Write;

use crate::helpers::{THREE_TOPICS, by_provider, demand};
use bundlequote::{QuoteDesk, QuoteError};
use rust_decimal_macros::dec;

#[test]
fn builds_from_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"provider_topics": {{"provider_a": "math+science", "provider_b": "reading+art"}}}}"#
    )
    .unwrap();

    let desk = QuoteDesk::builder()
        .catalog_file(file.path())
        .build()
        .unwrap();
    let prices = by_provider(&desk.quote(&demand(THREE_TOPICS)));
    assert_eq!(prices["provider_a"], dec!(8));
    assert_eq!(prices["provider_b"], dec!(6));
}

#[test]
fn missing_catalog_file_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuoteDesk::builder()
        .catalog_file(dir.path().join("providers.json"))
        .build()
        .err()
        .expect("missing file");
    assert!(matches!(err, QuoteError::CatalogSource { .. }));
}

#[test]
fn catalog_without_provider_topics_fails_build() {
    let err = QuoteDesk::builder()
        .catalog_json(r#"{"providers": {"a": "math"}}"#)
        .build()
        .err()
        .expect("wrong shape");
    assert!(matches!(err, QuoteError::InvalidCatalog(_)));
    assert!(!err.is_client_fault());
}
