//! bundlequote prices provider topic bundles against a requester's demand.
//!
//! Overview
//! - A requester supplies topic weights; the heaviest three topics are ranked.
//! - Each catalog provider lists an ordered bundle of topics it can supply.
//! - A provider whose bundle holds exactly two ranked topics, listed in
//!   consecutive ascending rank order, is priced at 10% of their combined weight.
//! - Any other provider with a ranked topic is priced on the first one it lists:
//!   20%, 25% or 30% of its weight for rank 0, 1 or 2.
//!
//! Key behaviors
//! - Malformed catalog entries are skipped one provider at a time; the rest of
//!   the catalog is still quoted.
//! - Malformed requests fail as a whole with `QuoteError::InvalidDemand`.
//! - Diagnostics flow through a `MatchObserver`; enable the `tracing` feature
//!   to route them to `tracing` by default.
//!
//! Example
//! ```rust,ignore
//! use bundlequote::{QuoteDesk, TopicDemand};
//!
//! let desk = QuoteDesk::builder()
//!     .catalog_json(r#"{"provider_topics": {"provider_a": "math+science"}}"#)
//!     .build()?;
//!
//! let demand = TopicDemand::from_pairs([("math", 50), ("science", 30), ("reading", 20)])?;
//! for quote in desk.quote(&demand) {
//!     println!("{} {}", quote.provider, quote.price);
//! }
//! ```
#![warn(missing_docs)]

mod core;
mod quotes;

pub use crate::core::{QuoteDesk, QuoteDeskBuilder};

pub use bundlequote_core::{
    BUNDLE_DELIMITER,
    CatalogEntry,
    CollectingObserver,
    MatchObserver,
    NoopObserver,
    PricingConfig,
    PricingRule,
    ProviderCatalog,
    Quote,
    QuoteError,
    QuoteReport,
    QuoteRequest,
    QuoteWarning,
    RankedTopic,
    TOP_TOPICS,
    TopicBundle,
    TopicDemand,
    calculate_single_topic_price,
    match_providers,
    match_providers_json,
    match_providers_with,
    rank_top_topics,
    rank_topics,
};

#[cfg(feature = "tracing")]
pub use bundlequote_core::TracingObserver;
