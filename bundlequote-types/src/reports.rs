//! Quote values and the report envelope produced by the matcher.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price offered by a single provider for the requested topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Provider identifier as listed in the catalog.
    pub provider: String,
    /// Non-negative price. Rounding and formatting belong to the caller.
    pub price: Decimal,
}

impl Quote {
    /// Build a quote for `provider` at `price`.
    pub fn new(provider: impl Into<String>, price: Decimal) -> Self {
        Self {
            provider: provider.into(),
            price,
        }
    }
}

/// Which pricing rule produced a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    /// Two consecutive ranked topics, billed on their combined weight.
    Pair,
    /// First matching topic in bundle order, billed by its rank tier.
    Single,
}

/// Non-fatal condition encountered while quoting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum QuoteWarning {
    /// A provider's bundle could not be read; the provider was not quoted.
    ProviderSkipped {
        /// Provider whose entry was skipped.
        provider: String,
        /// Why the bundle was rejected.
        reason: String,
    },
    /// No rate tier covers the rank; the provider was quoted at zero.
    RankOutOfRange {
        /// Provider that received the zero quote.
        provider: String,
        /// Topic that was priced.
        topic: String,
        /// Rank without a tier.
        rank: usize,
    },
    /// The bundle has an empty topic name (`"a++b"`); the name never matches
    /// and the rest of the bundle was still quoted.
    EmptyTopicName {
        /// Provider whose bundle holds the empty name.
        provider: String,
    },
    /// The price does not fit a `Decimal`; the provider was quoted at zero.
    PriceOverflow {
        /// Provider that received the zero quote.
        provider: String,
        /// Rule that was being applied.
        rule: PricingRule,
    },
}

/// Quotes plus the warnings collected while computing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuoteReport {
    /// One quote per provider with at least one matching topic, in catalog order.
    pub quotes: Vec<Quote>,
    /// Non-fatal issues encountered along the way.
    pub warnings: Vec<QuoteWarning>,
}
