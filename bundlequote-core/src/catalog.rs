use std::path::Path;

use bundlequote_types::QuoteError;
use serde_json::Value;

/// Separator between topic names in a catalog bundle string, e.g. `"math+science"`.
pub const BUNDLE_DELIMITER: char = '+';

/// A provider's ordered, non-empty list of topics.
///
/// Order matters: the first ranked topic in the bundle is the one priced by the
/// single-topic rule, and a pair only qualifies when it appears in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicBundle(Vec<String>);

impl TopicBundle {
    /// Build a bundle from already split topic names.
    ///
    /// Empty names are kept; they never match a demanded topic.
    ///
    /// # Errors
    /// Returns a reason when the list is empty.
    pub fn new<I, S>(topics: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let topics: Vec<String> = topics.into_iter().map(Into::into).collect();
        if topics.is_empty() {
            return Err("bundle lists no topics".to_string());
        }
        Ok(Self(topics))
    }

    /// Split a `+`-delimited bundle string, keeping the listed order.
    ///
    /// Segments are taken verbatim: surrounding whitespace is not trimmed and
    /// empty segments (`"a++b"`, `"a+"`, `""`) stay as empty names.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(BUNDLE_DELIMITER).map(str::to_string).collect())
    }

    /// Topics in bundle order.
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.0
    }

    /// True when any segment is an empty name.
    #[must_use]
    pub fn has_empty_topic(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }
}

/// One catalog line: a provider and its bundle, or why the bundle is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Provider identifier.
    pub provider: String,
    /// Parsed bundle, or the reason it was rejected.
    pub bundle: Result<TopicBundle, String>,
}

/// Providers and their topic bundles, in configuration order.
///
/// Malformed bundles are kept as entries so that matching can skip and report
/// them one provider at a time instead of rejecting the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderCatalog {
    entries: Vec<CatalogEntry>,
}

impl ProviderCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider with an already validated bundle.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>, bundle: TopicBundle) -> Self {
        self.entries.push(CatalogEntry {
            provider: provider.into(),
            bundle: Ok(bundle),
        });
        self
    }

    /// Append a provider from its raw `+`-delimited bundle string.
    #[must_use]
    pub fn with_raw_provider(self, provider: impl Into<String>, raw: &str) -> Self {
        self.with_provider(provider, TopicBundle::parse(raw))
    }

    /// Read a catalog document of the form `{"provider_topics": {"p": "a+b"}}`.
    ///
    /// Bundle values that are not strings become malformed entries; strings are
    /// split with [`TopicBundle::parse`].
    ///
    /// # Errors
    /// Returns `InvalidCatalog` when the document is not an object, lacks
    /// `provider_topics`, or `provider_topics` is not an object.
    pub fn from_value(value: &Value) -> Result<Self, QuoteError> {
        let root = value
            .as_object()
            .ok_or_else(|| QuoteError::invalid_catalog("catalog must be a JSON object"))?;
        let providers = root
            .get("provider_topics")
            .ok_or_else(|| QuoteError::invalid_catalog("catalog is missing provider_topics"))?
            .as_object()
            .ok_or_else(|| QuoteError::invalid_catalog("provider_topics must be an object"))?;

        let entries = providers
            .iter()
            .map(|(provider, raw)| CatalogEntry {
                provider: provider.clone(),
                bundle: match raw {
                    Value::String(s) => Ok(TopicBundle::parse(s)),
                    other => Err(format!("bundle must be a string, got {other}")),
                },
            })
            .collect();
        Ok(Self { entries })
    }

    /// Parse a catalog document from JSON text.
    ///
    /// # Errors
    /// Returns `InvalidCatalog` for invalid JSON or a document rejected by
    /// [`from_value`](Self::from_value).
    pub fn from_json_str(text: &str) -> Result<Self, QuoteError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| QuoteError::invalid_catalog(format!("catalog is not valid JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Load a catalog document from a JSON file.
    ///
    /// # Errors
    /// Returns `CatalogSource` if the file cannot be read, otherwise the errors of
    /// [`from_json_str`](Self::from_json_str).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bundlequote_core::catalog::from_path",
            skip(path),
            fields(path = %path.as_ref().display()),
            err,
        )
    )]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| QuoteError::catalog_source(path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&text)
    }

    /// Entries in configuration order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of providers, malformed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog lists no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
