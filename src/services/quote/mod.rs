//! Quote workflow: enrichment, manual edits, review and the session that ties
//! them to the calculator.
pub mod enrich;
pub mod provenance;
pub mod review;
pub mod session;
pub mod types;

pub use enrich::{enrich_line_items, resolve_unmatched, Enrichment};
pub use provenance::{EditEntry, EditKind, EditLog};
pub use review::{cross_check, CatalogueSuggestion};
pub use session::QuoteSession;
pub use types::{CalculatedProduct, ParsedLineItem, ProductSource, QuoteDetails, UnmatchedLine, VanType};
