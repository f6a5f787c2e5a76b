//! Domain types for catalogue lookup.
//!
//! Contains: ReferenceProduct, CatalogueOrigin, MatchStrategy, CatalogueMatch,
//! Lookup, Suggestion.

use serde::{Deserialize, Serialize};

/// Where a catalogue entry came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogueOrigin {
    /// Curated reference catalogue entry.
    #[default]
    Reference,
    /// Recorded from an earlier manual install-time entry.
    Learned,
}

/// A single immutable catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProduct {
    pub code: String,
    pub install_time_hours: f64,
    pub waste_volume_m3: f64,
    #[serde(default)]
    pub is_heavy: bool,
    #[serde(default)]
    pub requires_specialist: bool,
    #[serde(default)]
    pub origin: CatalogueOrigin,
}

impl ReferenceProduct {
    pub fn new(code: &str, install_time_hours: f64, waste_volume_m3: f64, is_heavy: bool) -> Self {
        Self {
            code: code.to_string(),
            install_time_hours,
            waste_volume_m3,
            is_heavy,
            requires_specialist: false,
            origin: CatalogueOrigin::Reference,
        }
    }
}

/// Which lookup step produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Trimmed input equals a catalogue code.
    Exact,
    /// Normalized input equals a normalized catalogue code.
    Normalized,
    /// Structured or free-text rule resolved to a size-specific entry.
    SpecificSize,
    /// Structured or free-text rule resolved to a generic family entry.
    GenericFamily,
    /// Configured alias rule.
    Alias,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::Exact => write!(f, "Exact"),
            MatchStrategy::Normalized => write!(f, "Normalized"),
            MatchStrategy::SpecificSize => write!(f, "SpecificSize"),
            MatchStrategy::GenericFamily => write!(f, "GenericFamily"),
            MatchStrategy::Alias => write!(f, "Alias"),
        }
    }
}

/// A resolved catalogue entry plus how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueMatch<'a> {
    pub product: &'a ReferenceProduct,
    pub strategy: MatchStrategy,
    /// Name of the rule that fired, for rule-table matches.
    pub rule: Option<&'a str>,
}

/// Lookup outcome. `NotFound` means the caller must ask for an install time.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Matched(CatalogueMatch<'a>),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn product(&self) -> Option<&'a ReferenceProduct> {
        match self {
            Lookup::Matched(found) => Some(found.product),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Matched(_))
    }
}

/// "Did you mean" candidate for an unmatched code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub code: String,
    pub similarity: f64,
}
