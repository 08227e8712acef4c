use crate::helpers::{FOUR_TOPICS, THREE_TOPICS, by_provider, demand, desk};
use bundlequote::TopicDemand;
use rust_decimal_macros::dec;

#[test]
fn consecutive_pairs_and_non_consecutive_fallback() {
    let desk = desk(&[
        ("provider_a", "math+science"),
        ("provider_b", "science+reading"),
        ("provider_c", "math+reading"),
    ]);
    let prices = by_provider(&desk.quote(&demand(FOUR_TOPICS)));

    assert_eq!(prices["provider_a"], dec!(8.0));
    assert_eq!(prices["provider_b"], dec!(5.0));
    assert_eq!(prices["provider_c"], dec!(10.0));
}

#[test]
fn unmatched_single_and_reverse_listed_providers() {
    let desk = desk(&[
        ("provider_a", "art+history"),
        ("provider_b", "math"),
        ("provider_c", "reading+art"),
        ("provider_d", "reading+science"),
    ]);
    let prices = by_provider(&desk.quote(&demand(THREE_TOPICS)));

    assert!(!prices.contains_key("provider_a"));
    assert_eq!(prices["provider_b"], dec!(10.0));
    assert_eq!(prices["provider_c"], dec!(6.0));
    // quoted, but on reading alone: the pair must be listed in ascending rank order
    assert_eq!(prices["provider_d"], dec!(6.0));
}

#[test]
fn equal_weights_rank_in_request_order() {
    let desk = desk(&[("p", "science+reading")]);
    let quotes = desk.quote(&demand(&[("math", 30), ("science", 30), ("reading", 30)]));
    // science is rank 1 and reading rank 2: a consecutive pair
    assert_eq!(by_provider(&quotes)["p"], dec!(6.0));
}

#[test]
fn empty_demand_or_catalog_quotes_nothing() {
    let full = desk(&[("provider_a", "math")]);
    assert!(full.quote(&TopicDemand::new()).is_empty());

    let empty = desk(&[]);
    assert!(empty.quote(&demand(THREE_TOPICS)).is_empty());
}
