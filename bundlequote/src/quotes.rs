use bundlequote_core::{
    CollectingObserver, Quote, QuoteError, QuoteReport, QuoteRequest, TopicDemand,
    match_providers_with,
};
use serde_json::Value;

use crate::QuoteDesk;

impl QuoteDesk {
    /// Quote every catalog provider against `demand`.
    ///
    /// Behavior:
    /// - Only the desk's `ranked_depth` heaviest topics take part in matching.
    /// - Providers with no matching topic are omitted; quotes follow catalog order.
    /// - Malformed catalog entries are skipped and reported to the observer.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "bundlequote::quote", skip(self, demand), fields(topics = demand.len()))
    )]
    #[must_use]
    pub fn quote(&self, demand: &TopicDemand) -> Vec<Quote> {
        match_providers_with(demand, &self.catalog, &self.cfg, self.observer.as_ref())
    }

    /// Quote `demand` and collect the non-fatal warnings raised on the way.
    ///
    /// The desk's observer still receives every callback.
    #[must_use]
    pub fn quote_report(&self, demand: &TopicDemand) -> QuoteReport {
        let collecting = CollectingObserver::forwarding(self.observer.as_ref());
        let quotes = match_providers_with(demand, &self.catalog, &self.cfg, &collecting);
        QuoteReport {
            quotes,
            warnings: collecting.into_warnings(),
        }
    }

    /// Validate an untyped request body (`{"topics": {...}}`) and quote it.
    ///
    /// # Errors
    /// Returns `InvalidDemand` if the body or its topics are malformed.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "bundlequote::quote_json", skip_all, err))]
    pub fn quote_json(&self, body: &Value) -> Result<Vec<Quote>, QuoteError> {
        let request = QuoteRequest::from_value(body)?;
        Ok(self.quote(&request.topics))
    }

    /// Quote several request bodies independently.
    ///
    /// Outcomes are returned in input order. A malformed body yields an error in
    /// its own slot without affecting the others.
    #[must_use]
    pub fn quote_batch(&self, bodies: &[Value]) -> Vec<Result<Vec<Quote>, QuoteError>> {
        bodies.iter().map(|body| self.quote_json(body)).collect()
    }
}
