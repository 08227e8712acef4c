use std::collections::HashMap;

use bundlequote_types::{PricingConfig, PricingRule, Quote, QuoteError};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::catalog::{ProviderCatalog, TopicBundle};
use crate::demand::TopicDemand;
use crate::observer::{MatchObserver, NoopObserver};
use crate::pricing::{is_consecutive_pair, pair_price, single_price};
use crate::rank::rank_topics;

/// A bundle topic that is also among the ranked topics.
#[derive(Debug, Clone, Copy)]
struct Match<'a> {
    topic: &'a str,
    weight: u64,
    rank: usize,
}

/// Quote every catalog provider against `demand` with the default tiers.
///
/// Providers with no ranked topic in their bundle are omitted, and entries
/// whose bundle was not a string are skipped silently. Output follows catalog
/// order.
#[must_use]
pub fn match_providers(demand: &TopicDemand, catalog: &ProviderCatalog) -> Vec<Quote> {
    match_providers_with(demand, catalog, &PricingConfig::default(), &NoopObserver)
}

/// Validate untyped inputs and quote them with the default tiers.
///
/// The catalog document is checked first, then the demand object.
///
/// # Errors
/// Returns `InvalidCatalog` for a malformed catalog document and
/// `InvalidDemand` for a malformed topics object.
pub fn match_providers_json(demand: &Value, catalog: &Value) -> Result<Vec<Quote>, QuoteError> {
    let catalog = ProviderCatalog::from_value(catalog)?;
    let demand = TopicDemand::from_value(demand)?;
    Ok(match_providers(&demand, &catalog))
}

/// Quote every catalog provider against `demand` using `cfg`, reporting
/// diagnostics to `observer`.
///
/// For each provider, in catalog order:
/// - a malformed entry is reported and skipped;
/// - an empty topic name in the bundle is reported but never matches;
/// - the bundle is filtered, in bundle order, to topics among the
///   `cfg.ranked_depth` heaviest demanded topics;
/// - no match produces no quote;
/// - exactly two matches whose ranks ascend by one in bundle order are priced
///   together at `cfg.pair_rate`;
/// - otherwise the first match is priced by its rank tier, or at zero (with a
///   warning) when no tier covers its rank.
///
/// A price that overflows `Decimal` is quoted at zero with a warning.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "bundlequote_core::matcher::match_providers",
        skip(demand, catalog, cfg, observer),
        fields(topics = demand.len(), providers = catalog.len()),
    )
)]
pub fn match_providers_with(
    demand: &TopicDemand,
    catalog: &ProviderCatalog,
    cfg: &PricingConfig,
    observer: &dyn MatchObserver,
) -> Vec<Quote> {
    let ranked = rank_topics(demand, cfg.ranked_depth);
    if ranked.is_empty() {
        return Vec::new();
    }

    let lookup: HashMap<&str, (u64, usize)> = ranked
        .iter()
        .map(|r| (r.topic.as_str(), (r.weight, r.rank)))
        .collect();

    let mut quotes = Vec::new();
    for entry in catalog.entries() {
        let bundle = match &entry.bundle {
            Ok(bundle) => bundle,
            Err(reason) => {
                observer.provider_skipped(&entry.provider, reason);
                continue;
            }
        };
        if bundle.has_empty_topic() {
            observer.empty_topic_name(&entry.provider);
        }

        let matches = matching_topics(bundle, &lookup);
        let Some((rule, price)) = price_matches(&entry.provider, &matches, cfg, observer) else {
            continue;
        };
        observer.quoted(&entry.provider, rule, price);
        quotes.push(Quote::new(entry.provider.clone(), price));
    }
    quotes
}

fn matching_topics<'a>(
    bundle: &'a TopicBundle,
    lookup: &HashMap<&str, (u64, usize)>,
) -> Vec<Match<'a>> {
    bundle
        .topics()
        .iter()
        .filter_map(|topic| {
            lookup.get(topic.as_str()).map(|&(weight, rank)| Match {
                topic,
                weight,
                rank,
            })
        })
        .collect()
}

fn price_matches(
    provider: &str,
    matches: &[Match<'_>],
    cfg: &PricingConfig,
    observer: &dyn MatchObserver,
) -> Option<(PricingRule, Decimal)> {
    if let [a, b] = matches
        && is_consecutive_pair(a.rank, b.rank)
    {
        let price = pair_price(a.weight, b.weight, cfg.pair_rate)
            .unwrap_or_else(|| overflowed(provider, PricingRule::Pair, observer));
        return Some((PricingRule::Pair, price));
    }

    let first = matches.first()?;
    let price = match cfg.single_rate(first.rank) {
        Some(rate) => single_price(first.weight, rate)
            .unwrap_or_else(|| overflowed(provider, PricingRule::Single, observer)),
        None => {
            observer.rank_out_of_range(provider, first.topic, first.rank);
            Decimal::ZERO
        }
    };
    Some((PricingRule::Single, price))
}

fn overflowed(provider: &str, rule: PricingRule, observer: &dyn MatchObserver) -> Decimal {
    observer.price_overflow(provider, rule);
    Decimal::ZERO
}
