//! Error, configuration and report types shared by the bundlequote crates.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;

pub use config::PricingConfig;
pub use error::QuoteError;
pub use reports::{PricingRule, Quote, QuoteReport, QuoteWarning};
