use bundlequote_types::PricingConfig;
use rust_decimal::Decimal;

/// Price one topic of weight `count` at `rank` with the default tiers.
///
/// Rank 0 pays 20%, rank 1 25% and rank 2 30% of the weight; any other rank
/// prices at zero.
#[must_use]
pub fn calculate_single_topic_price(count: u64, rank: usize) -> Decimal {
    PricingConfig::default()
        .single_rate(rank)
        .and_then(|rate| single_price(count, rate))
        .unwrap_or(Decimal::ZERO)
}

/// Price one topic of weight `count` at `rate`, or `None` on overflow.
///
/// Prices are normalized, so 50 at 20% is `10` rather than `10.00`.
#[must_use]
pub fn single_price(count: u64, rate: Decimal) -> Option<Decimal> {
    Decimal::from(count).checked_mul(rate).map(|p| p.normalize())
}

/// Price a consecutive pair on its combined weight, or `None` on overflow.
#[must_use]
pub fn pair_price(first: u64, second: u64, rate: Decimal) -> Option<Decimal> {
    (Decimal::from(first) + Decimal::from(second))
        .checked_mul(rate)
        .map(|p| p.normalize())
}

/// True when `second` directly follows `first` in rank order.
///
/// The arguments are taken in bundle order, so a bundle listing the lower
/// ranked topic first never qualifies.
#[must_use]
pub const fn is_consecutive_pair(first: usize, second: usize) -> bool {
    first < second && second - first == 1
}
