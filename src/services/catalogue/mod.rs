//! Catalogue Lookup: resolves raw product codes and descriptions to reference
//! catalogue entries.
// Module structure
pub mod index;
pub mod lookup;
pub mod normalizer;
pub mod rules;
pub mod types;

pub use index::CatalogueIndex;
pub use lookup::{find_best_match, suggest_similar};
pub use rules::RuleTable;
pub use types::{CatalogueMatch, CatalogueOrigin, Lookup, MatchStrategy, ReferenceProduct, Suggestion};
