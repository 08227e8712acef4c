use std::sync::{Mutex, PoisonError};

use bundlequote_types::{PricingRule, QuoteWarning};
use rust_decimal::Decimal;

/// Receives diagnostics from the matcher.
///
/// Every method has a no-op default so implementors only override what they
/// care about. Callbacks are informational: they cannot alter the outcome of a
/// match.
pub trait MatchObserver: Send + Sync {
    /// A provider's bundle was malformed and the provider was not quoted.
    fn provider_skipped(&self, _provider: &str, _reason: &str) {}

    /// No rate tier covers `rank`; the provider was quoted at zero.
    fn rank_out_of_range(&self, _provider: &str, _topic: &str, _rank: usize) {}

    /// The provider's bundle lists an empty topic name, which never matches.
    fn empty_topic_name(&self, _provider: &str) {}

    /// The price overflowed; the provider was quoted at zero.
    fn price_overflow(&self, _provider: &str, _rule: PricingRule) {}

    /// A quote was produced.
    fn quoted(&self, _provider: &str, _rule: PricingRule, _price: Decimal) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

/// Observer that records warnings, optionally forwarding every callback.
#[derive(Default)]
pub struct CollectingObserver<'a> {
    inner: Option<&'a dyn MatchObserver>,
    warnings: Mutex<Vec<QuoteWarning>>,
}

impl<'a> CollectingObserver<'a> {
    /// Collect warnings without forwarding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect warnings and forward every callback to `inner`.
    #[must_use]
    pub fn forwarding(inner: &'a dyn MatchObserver) -> Self {
        Self {
            inner: Some(inner),
            warnings: Mutex::new(Vec::new()),
        }
    }

    /// Warnings recorded so far, in the order they were raised.
    #[must_use]
    pub fn into_warnings(self) -> Vec<QuoteWarning> {
        self.warnings
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, warning: QuoteWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning);
    }
}

impl MatchObserver for CollectingObserver<'_> {
    fn provider_skipped(&self, provider: &str, reason: &str) {
        self.push(QuoteWarning::ProviderSkipped {
            provider: provider.to_string(),
            reason: reason.to_string(),
        });
        if let Some(inner) = self.inner {
            inner.provider_skipped(provider, reason);
        }
    }

    fn rank_out_of_range(&self, provider: &str, topic: &str, rank: usize) {
        self.push(QuoteWarning::RankOutOfRange {
            provider: provider.to_string(),
            topic: topic.to_string(),
            rank,
        });
        if let Some(inner) = self.inner {
            inner.rank_out_of_range(provider, topic, rank);
        }
    }

    fn empty_topic_name(&self, provider: &str) {
        self.push(QuoteWarning::EmptyTopicName {
            provider: provider.to_string(),
        });
        if let Some(inner) = self.inner {
            inner.empty_topic_name(provider);
        }
    }

    fn price_overflow(&self, provider: &str, rule: PricingRule) {
        self.push(QuoteWarning::PriceOverflow {
            provider: provider.to_string(),
            rule,
        });
        if let Some(inner) = self.inner {
            inner.price_overflow(provider, rule);
        }
    }

    fn quoted(&self, provider: &str, rule: PricingRule, price: Decimal) {
        if let Some(inner) = self.inner {
            inner.quoted(provider, rule, price);
        }
    }
}

/// Observer that emits `tracing` events.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl MatchObserver for TracingObserver {
    fn provider_skipped(&self, provider: &str, reason: &str) {
        tracing::warn!(provider, reason, "skipping provider with malformed bundle");
    }

    fn rank_out_of_range(&self, provider: &str, topic: &str, rank: usize) {
        tracing::warn!(provider, topic, rank, "no rate tier for rank; quoting zero");
    }

    fn empty_topic_name(&self, provider: &str) {
        tracing::warn!(provider, "bundle lists an empty topic name");
    }

    fn price_overflow(&self, provider: &str, rule: PricingRule) {
        tracing::warn!(provider, rule = ?rule, "price overflowed; quoting zero");
    }

    fn quoted(&self, provider: &str, rule: PricingRule, price: Decimal) {
        tracing::debug!(provider, rule = ?rule, price = %price, "quoted provider");
    }
}
