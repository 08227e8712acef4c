use crate::helpers::desk;
use bundlequote::{Quote, QuoteError};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn quote_json_accepts_request_body() {
    let desk = desk(&[("provider_a", "math+science")]);
    let quotes = desk
        .quote_json(&json!({"topics": {"math": 50, "science": 30, "reading": 20}}))
        .unwrap();
    assert_eq!(quotes, vec![Quote::new("provider_a", dec!(8))]);
}

#[test]
fn quote_json_rejects_malformed_bodies() {
    let desk = desk(&[("provider_a", "math")]);
    for body in [
        json!({"topics": {"math": 2.5}}),
        json!({"topics": {"math": -3}}),
        json!({"topics": ["math"]}),
        json!({"subjects": {"math": 50}}),
        json!("math"),
    ] {
        let err = desk.quote_json(&body).expect_err("malformed body");
        assert!(matches!(err, QuoteError::InvalidDemand(_)), "{body}");
    }
}

#[test]
fn batch_isolates_bad_requests() {
    let desk = desk(&[("provider_a", "math")]);
    let outcomes = desk.quote_batch(&[
        json!({"topics": {"math": 50}}),
        json!({"topics": {"math": "fifty"}}),
        json!({"topics": {}}),
    ]);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes[0].as_ref().unwrap(),
        &vec![Quote::new("provider_a", dec!(10))]
    );
    assert!(matches!(outcomes[1], Err(QuoteError::InvalidDemand(_))));
    assert!(outcomes[2].as_ref().unwrap().is_empty());
}

#[test]
fn quotes_serialize_with_numeric_prices() {
    let desk = desk(&[("provider_b", "math")]);
    let quotes = desk.quote_json(&json!({"topics": {"math": 50}})).unwrap();
    let body = serde_json::to_value(&quotes).unwrap();
    assert_eq!(body, json!([{"provider": "provider_b", "price": 10.0}]));
}
