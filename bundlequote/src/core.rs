use std::path::PathBuf;
use std::sync::Arc;

use bundlequote_core::{MatchObserver, PricingConfig, ProviderCatalog, QuoteError};

/// Prices quote requests against a fixed provider catalog.
///
/// The catalog and pricing configuration are read-only after `build`, so a
/// desk can be shared behind an `Arc` and queried from any thread.
pub struct QuoteDesk {
    pub(crate) catalog: ProviderCatalog,
    pub(crate) cfg: PricingConfig,
    pub(crate) observer: Arc<dyn MatchObserver>,
}

enum CatalogSource {
    Ready(ProviderCatalog),
    Json(String),
    File(PathBuf),
}

/// Builder for constructing a `QuoteDesk`.
pub struct QuoteDeskBuilder {
    catalog: Option<CatalogSource>,
    cfg: PricingConfig,
    observer: Option<Arc<dyn MatchObserver>>,
}

impl Default for QuoteDeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteDeskBuilder {
    /// Create a builder with default pricing tiers and no catalog.
    ///
    /// A catalog must be supplied through one of [`catalog`](Self::catalog),
    /// [`catalog_json`](Self::catalog_json) or [`catalog_file`](Self::catalog_file)
    /// before building; the last one set wins.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            cfg: PricingConfig::default(),
            observer: None,
        }
    }

    /// Use an already built catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: ProviderCatalog) -> Self {
        self.catalog = Some(CatalogSource::Ready(catalog));
        self
    }

    /// Parse the catalog from a JSON document when building.
    #[must_use]
    pub fn catalog_json(mut self, text: impl Into<String>) -> Self {
        self.catalog = Some(CatalogSource::Json(text.into()));
        self
    }

    /// Load the catalog from a JSON file when building.
    #[must_use]
    pub fn catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(CatalogSource::File(path.into()));
        self
    }

    /// Replace the pricing configuration.
    #[must_use]
    pub fn pricing(mut self, cfg: PricingConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Route matcher diagnostics to `observer`.
    ///
    /// Without one, diagnostics go to `tracing` when the `tracing` feature is
    /// enabled and are dropped otherwise.
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn MatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the `QuoteDesk`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if no catalog was supplied or the pricing
    /// configuration is invalid, and the catalog loading errors of
    /// [`ProviderCatalog::from_json_str`] / [`ProviderCatalog::from_path`].
    pub fn build(self) -> Result<QuoteDesk, QuoteError> {
        self.cfg.validate()?;

        let catalog = match self.catalog {
            None => {
                return Err(QuoteError::invalid_config(
                    "no catalog supplied; set one via catalog(...), catalog_json(...) or catalog_file(...)",
                ));
            }
            Some(CatalogSource::Ready(catalog)) => catalog,
            Some(CatalogSource::Json(text)) => ProviderCatalog::from_json_str(&text)?,
            Some(CatalogSource::File(path)) => ProviderCatalog::from_path(&path)?,
        };

        #[cfg(feature = "tracing")]
        {
            let malformed = catalog
                .entries()
                .iter()
                .filter(|e| e.bundle.is_err())
                .count();
            tracing::info!(
                providers = catalog.len(),
                malformed,
                ranked_depth = self.cfg.ranked_depth,
                "quote desk ready"
            );
        }

        Ok(QuoteDesk {
            catalog,
            cfg: self.cfg,
            observer: self.observer.unwrap_or_else(default_observer),
        })
    }
}

fn default_observer() -> Arc<dyn MatchObserver> {
    #[cfg(feature = "tracing")]
    {
        Arc::new(bundlequote_core::TracingObserver)
    }
    #[cfg(not(feature = "tracing"))]
    {
        Arc::new(bundlequote_core::NoopObserver)
    }
}

impl QuoteDesk {
    /// Start building a new `QuoteDesk`.
    ///
    /// ```rust,ignore
    /// let desk = bundlequote::QuoteDesk::builder()
    ///     .catalog_file("data/providers.json")
    ///     .build()?;
    /// let demand = bundlequote::TopicDemand::from_pairs([("math", 50), ("science", 30)])?;
    /// let quotes = desk.quote(&demand);
    /// ```
    #[must_use]
    pub fn builder() -> QuoteDeskBuilder {
        QuoteDeskBuilder::new()
    }

    /// Catalog the desk quotes against.
    #[must_use]
    pub fn catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    /// Pricing configuration in effect.
    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        &self.cfg
    }
}
