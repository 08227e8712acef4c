//! bundlequote-core
//!
//! Ranking, matching and pricing primitives shared across the bundlequote crates.
//!
//! - `demand`: the requester's topic → weight mapping and request validation.
//! - `rank`: top-N ranking of a demand by weight.
//! - `catalog`: provider bundles and the JSON catalog adapter.
//! - `pricing`: the pair and single-topic rate rules.
//! - `matcher`: per-provider matching that turns a demand into quotes.
//! - `observer`: the diagnostics seam used by the matcher.
//!
//! Everything here is synchronous and side-effect free apart from the optional
//! file read in [`ProviderCatalog::from_path`]. Diagnostics are delivered to an
//! injected [`MatchObserver`] rather than to a global logger.
#![warn(missing_docs)]

/// Provider bundles and catalog loading.
pub mod catalog;
/// Topic demand and request validation.
pub mod demand;
/// Provider matching.
pub mod matcher;
/// Diagnostics callbacks.
pub mod observer;
/// Rate rules.
pub mod pricing;
/// Top-N topic ranking.
pub mod rank;

pub use bundlequote_types::{
    PricingConfig, PricingRule, Quote, QuoteError, QuoteReport, QuoteWarning,
};
pub use catalog::{BUNDLE_DELIMITER, CatalogEntry, ProviderCatalog, TopicBundle};
pub use demand::{QuoteRequest, TopicDemand};
pub use matcher::{match_providers, match_providers_json, match_providers_with};
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use observer::{CollectingObserver, MatchObserver, NoopObserver};
pub use pricing::calculate_single_topic_price;
pub use rank::{RankedTopic, TOP_TOPICS, rank_top_topics, rank_topics};
