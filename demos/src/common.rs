use std::path::PathBuf;

use bundlequote::{QuoteDesk, QuoteError, TopicDemand};

/// Environment variable overriding the catalog file used by the demos.
pub const CATALOG_ENV: &str = "BUNDLEQUOTE_CATALOG";

/// Path of the provider catalog for demos.
///
/// Uses `BUNDLEQUOTE_CATALOG` when set, else the catalog bundled under `data/`.
#[must_use]
pub fn catalog_path() -> PathBuf {
    std::env::var_os(CATALOG_ENV).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/providers.json"),
        PathBuf::from,
    )
}

/// Build a desk over the demo catalog with default pricing.
///
/// # Errors
/// Returns the catalog loading error if the file is missing or malformed.
pub fn desk() -> Result<QuoteDesk, QuoteError> {
    QuoteDesk::builder().catalog_file(catalog_path()).build()
}

/// The four-topic request used across the demos.
///
/// # Errors
/// Never fails for the fixed topics; the `Result` mirrors `TopicDemand::from_pairs`.
pub fn sample_demand() -> Result<TopicDemand, QuoteError> {
    TopicDemand::from_pairs([("math", 50), ("science", 30), ("reading", 20), ("history", 15)])
}
