use std::collections::HashMap;
use std::sync::Mutex;

use bundlequote::{MatchObserver, PricingRule, ProviderCatalog, Quote, QuoteDesk, TopicDemand};
use rust_decimal::Decimal;

// ---------- Lightweight fixtures and helpers for tests ----------

/// Demand used by the consecutive-pair scenarios.
pub const FOUR_TOPICS: &[(&str, u64)] = &[
    ("math", 50),
    ("science", 30),
    ("reading", 20),
    ("history", 15),
];

/// Demand used by the single-topic scenarios.
pub const THREE_TOPICS: &[(&str, u64)] = &[("math", 50), ("science", 30), ("reading", 20)];

/// Build a `TopicDemand` from static pairs.
pub fn demand(pairs: &[(&str, u64)]) -> TopicDemand {
    TopicDemand::from_pairs(pairs.iter().copied()).expect("valid static test demand")
}

/// Build a catalog from `(provider, "a+b")` pairs.
pub fn catalog(entries: &[(&str, &str)]) -> ProviderCatalog {
    entries
        .iter()
        .fold(ProviderCatalog::new(), |cat, (provider, raw)| {
            cat.with_raw_provider(*provider, raw)
        })
}

/// Build a desk over `entries` with default pricing.
pub fn desk(entries: &[(&str, &str)]) -> QuoteDesk {
    QuoteDesk::builder()
        .catalog(catalog(entries))
        .build()
        .expect("valid test desk")
}

/// Index quotes by provider for order-independent assertions.
pub fn by_provider(quotes: &[Quote]) -> HashMap<String, Decimal> {
    quotes
        .iter()
        .map(|q| (q.provider.clone(), q.price))
        .collect()
}

/// Observer that records every callback as a readable line.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, line: String) {
        self.events.lock().unwrap().push(line);
    }
}

impl MatchObserver for RecordingObserver {
    fn provider_skipped(&self, provider: &str, _reason: &str) {
        self.record(format!("skipped {provider}"));
    }

    fn rank_out_of_range(&self, provider: &str, topic: &str, rank: usize) {
        self.record(format!("out_of_range {provider} {topic} {rank}"));
    }

    fn empty_topic_name(&self, provider: &str) {
        self.record(format!("empty_name {provider}"));
    }

    fn price_overflow(&self, provider: &str, rule: PricingRule) {
        self.record(format!("overflow {provider} {rule:?}"));
    }

    fn quoted(&self, provider: &str, rule: PricingRule, price: Decimal) {
        self.record(format!("quoted {provider} {rule:?} {price}"));
    }
}
