use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the bundlequote workspace.
///
/// Separates faults in the caller's demand from faults in the provider catalog
/// or in the engine's own configuration. Per-provider problems never show up
/// here; they are reported as [`QuoteWarning`](crate::QuoteWarning)s instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuoteError {
    /// The topic demand is structurally malformed (wrong container, empty
    /// topic name, non-integer or negative weight).
    #[error("invalid demand: {0}")]
    InvalidDemand(String),

    /// The provider catalog is malformed at the top level.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Pricing configuration or builder state was rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The catalog file could not be read.
    #[error("catalog source {path} unreadable: {msg}")]
    CatalogSource {
        /// Path that was being read.
        path: String,
        /// Human-readable I/O failure.
        msg: String,
    },
}

impl QuoteError {
    /// Helper: build an `InvalidDemand` error.
    pub fn invalid_demand(msg: impl Into<String>) -> Self {
        Self::InvalidDemand(msg.into())
    }

    /// Helper: build an `InvalidCatalog` error.
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog(msg.into())
    }

    /// Helper: build an `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Helper: build a `CatalogSource` error for an unreadable path.
    pub fn catalog_source(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::CatalogSource {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if the fault lies with the requester's input.
    ///
    /// Catalog, configuration and source errors indicate the service itself
    /// needs fixing and are independent of any single request.
    #[must_use]
    pub const fn is_client_fault(&self) -> bool {
        matches!(self, Self::InvalidDemand(_))
    }
}
