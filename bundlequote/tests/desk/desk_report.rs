use std::sync::Arc;

use crate::helpers::{RecordingObserver, THREE_TOPICS, catalog, demand};
use bundlequote::{PricingConfig, Quote, QuoteDesk, QuoteWarning};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn report_lists_skipped_and_flagged_providers_and_keeps_quoting() {
    let desk = QuoteDesk::builder()
        .catalog_json(
            r#"{"provider_topics": {
                "gap": "math++science",
                "not_text": ["math"],
                "fine": "math"
            }}"#,
        )
        .build()
        .unwrap();

    let report = desk.quote_report(&demand(THREE_TOPICS));
    assert_eq!(
        report.quotes,
        vec![Quote::new("gap", dec!(8)), Quote::new("fine", dec!(10))]
    );

    let skipped: Vec<&str> = report
        .warnings
        .iter()
        .filter_map(|w| match w {
            QuoteWarning::ProviderSkipped { provider, .. } => Some(provider.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(skipped, vec!["not_text"]);
    assert!(report.warnings.contains(&QuoteWarning::EmptyTopicName {
        provider: "gap".into()
    }));
}

#[test]
fn report_forwards_to_configured_observer() {
    let observer = Arc::new(RecordingObserver::default());
    let desk = QuoteDesk::builder()
        .catalog(catalog(&[("bad", ""), ("pair", "math+science")]))
        .observer(observer.clone())
        .build()
        .unwrap();

    let report = desk.quote_report(&demand(THREE_TOPICS));
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(
        observer.events(),
        vec!["empty_name bad".to_string(), "quoted pair Pair 8".to_string()]
    );
}

#[test]
fn zero_quote_for_rank_without_tier_is_reported() {
    let desk = QuoteDesk::builder()
        .catalog(catalog(&[("deep", "history")]))
        .pricing(PricingConfig {
            ranked_depth: 4,
            ..PricingConfig::default()
        })
        .build()
        .unwrap();

    let report = desk.quote_report(&demand(&[
        ("math", 50),
        ("science", 30),
        ("reading", 20),
        ("history", 15),
    ]));
    assert_eq!(report.quotes, vec![Quote::new("deep", Decimal::ZERO)]);
    assert_eq!(
        report.warnings,
        vec![QuoteWarning::RankOutOfRange {
            provider: "deep".into(),
            topic: "history".into(),
            rank: 3,
        }]
    );
}
