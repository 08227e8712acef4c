use crate::helpers::{THREE_TOPICS, by_provider, catalog, demand};
use bundlequote::{PricingConfig, QuoteDesk};
use rust_decimal_macros::dec;

#[test]
fn custom_rates_apply_to_both_rules() {
    let cfg: PricingConfig = serde_json::from_str(
        r#"{"pair_rate": 0.5, "single_rates": [1.0, 0.5, 0.25]}"#,
    )
    .unwrap();
    let desk = QuoteDesk::builder()
        .catalog(catalog(&[("pair", "math+science"), ("single", "reading")]))
        .pricing(cfg)
        .build()
        .unwrap();

    let prices = by_provider(&desk.quote(&demand(THREE_TOPICS)));
    assert_eq!(prices["pair"], dec!(40));
    assert_eq!(prices["single"], dec!(5));
}

#[test]
fn shallower_ranking_drops_lower_topics() {
    let desk = QuoteDesk::builder()
        .catalog(catalog(&[("p", "reading+math")]))
        .pricing(PricingConfig {
            ranked_depth: 1,
            ..PricingConfig::default()
        })
        .build()
        .unwrap();

    // only math is ranked, so reading is ignored even though it is listed first
    let prices = by_provider(&desk.quote(&demand(THREE_TOPICS)));
    assert_eq!(prices["p"], dec!(10));
}
