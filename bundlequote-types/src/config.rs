//! Pricing configuration shared by the engine and the orchestrator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::QuoteError;

/// Rates and ranking depth used to price provider bundles.
///
/// The defaults reproduce the published tiers: the three heaviest topics are
/// ranked, a consecutive pair is billed at 10% of its combined weight, and a
/// single topic at 20%/25%/30% of its weight for rank 0/1/2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// How many of the heaviest topics take part in matching.
    pub ranked_depth: usize,
    /// Rate applied to the combined weight of a consecutive pair.
    pub pair_rate: Decimal,
    /// Rate applied to a single topic, indexed by its rank.
    ///
    /// Ranks without an entry price at zero.
    pub single_rates: Vec<Decimal>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            ranked_depth: 3,
            pair_rate: Decimal::new(10, 2),
            single_rates: vec![Decimal::new(20, 2), Decimal::new(25, 2), Decimal::new(30, 2)],
        }
    }
}

impl PricingConfig {
    /// Rate for a single topic at `rank`, or `None` when no tier covers it.
    #[must_use]
    pub fn single_rate(&self, rank: usize) -> Option<Decimal> {
        self.single_rates.get(rank).copied()
    }

    /// Check that the configuration can price anything at all.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when `ranked_depth` is zero or any rate falls
    /// outside `0..=1`.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.ranked_depth == 0 {
            return Err(QuoteError::invalid_config("ranked_depth must be at least 1"));
        }
        if !is_fraction(self.pair_rate) {
            return Err(QuoteError::invalid_config(format!(
                "pair_rate must be between 0 and 1, got {}",
                self.pair_rate
            )));
        }
        if let Some((rank, rate)) = self
            .single_rates
            .iter()
            .enumerate()
            .find(|(_, r)| !is_fraction(**r))
        {
            return Err(QuoteError::invalid_config(format!(
                "single rate for rank {rank} must be between 0 and 1, got {rate}"
            )));
        }
        Ok(())
    }
}

fn is_fraction(rate: Decimal) -> bool {
    (Decimal::ZERO..=Decimal::ONE).contains(&rate)
}
