//! SmartQuote core: catalogue matching and quote calculation for office
//! furniture installation jobs.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::calculator::{calculate, CalculationResults};
pub use services::catalogue::{find_best_match, CatalogueIndex, Lookup, ReferenceProduct};
pub use services::config::{ConfigService, QuoteConfig};
pub use services::quote::QuoteSession;
pub use types::errors::{QuoteError, QuoteResult, ValidationError};
