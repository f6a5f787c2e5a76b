//! Ordered rule table for pattern-based catalogue resolution.
//!
//! Each rule is a pattern plus a resolution strategy. Rules are evaluated in
//! table order after exact matching fails; a rule that matches the input but
//! whose candidate keys are all absent from the catalogue falls through to the
//! next rule.
//!
//! Table order:
//! 1. `structured-seat-code`: `FAMILY<N>P<digits>[suffix]` on the normalized code
//! 2. one `<family>-seat-text` rule per configured family (natural language)
//! 3. configured alias rules

use regex::Regex;
use std::sync::LazyLock;

use super::normalizer::{normalize_code, normalize_description, strip_known_prefixes};
use super::types::MatchStrategy;
use crate::services::config::{AliasConfig, FamilyConfig, MatcherConfig};
use crate::types::errors::{QuoteError, QuoteResult};

pub const STRUCTURED_RULE: &str = "structured-seat-code";

/// Normalized seat code: `FLX4P2400` (from `FLX-4P-2400`, `FLX 4P 2400`,
/// `FLX4P-2400`), `FLX4P2816A`. A 4-digit group is captured as the size; a
/// suffix must start with a letter.
static RE_STRUCTURED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<family>[A-Z]+)(?P<count>\d+)P(?:(?P<size>\d{4})|\d+)(?:[A-Z][A-Z0-9]*)?$")
        .expect("Invalid regex")
});

/// Size token inside a normalized description (`2400`, `L2400`, `2400MM`).
static RE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bL?(?P<size>\d{4})(?:MM)?\b").expect("Invalid regex"));

const SEAT_WORDS: &str = r"(?:P|PAX|PERSON|PEOPLE|SEATER|SEATS|SEAT)";

/// What text a rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleInput {
    /// Normalized code key (separators removed).
    Code,
    /// Normalized description with known prefixes stripped.
    Description,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Seat-count family. `family: None` takes the family from the `family`
    /// capture group.
    FamilySeats { family: Option<String> },
    /// Fixed catalogue codes, tried in order.
    Codes(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct MatchRule {
    pub name: String,
    pub input: RuleInput,
    pattern: Regex,
    pub resolution: Resolution,
}

/// A catalogue key to try, in order, plus the strategy it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateKey {
    pub key: String,
    pub strategy: MatchStrategy,
}

impl MatchRule {
    /// Candidate keys for this rule, or `None` if the pattern does not match.
    pub fn candidates(&self, code_input: &str, description_input: &str) -> Option<Vec<CandidateKey>> {
        let text = match self.input {
            RuleInput::Code => code_input,
            RuleInput::Description => description_input,
        };
        let caps = self.pattern.captures(text)?;

        match &self.resolution {
            Resolution::FamilySeats { family } => {
                let family = match family {
                    Some(f) => f.clone(),
                    None => caps.name("family")?.as_str().to_string(),
                };
                // Reverse spellings ("6 SEATER FLX") capture into `rcount`.
                let count: u32 = caps
                    .name("count")
                    .or_else(|| caps.name("rcount"))?
                    .as_str()
                    .parse()
                    .ok()?;
                if count == 0 {
                    return None;
                }
                let size = match self.input {
                    RuleInput::Code => caps.name("size").map(|m| m.as_str().to_string()),
                    RuleInput::Description => RE_SIZE
                        .captures(text)
                        .and_then(|c| c.name("size").map(|m| m.as_str().to_string())),
                };
                Some(family_seat_keys(&family, count, size.as_deref()))
            }
            Resolution::Codes(codes) => Some(
                codes
                    .iter()
                    .map(|code| CandidateKey {
                        key: code.clone(),
                        strategy: MatchStrategy::Alias,
                    })
                    .collect(),
            ),
        }
    }
}

/// Keys for a seat-count family, most specific first.
///
/// The size-specific coworking key is only tried for multi-seat codes.
pub fn family_seat_keys(family: &str, count: u32, size: Option<&str>) -> Vec<CandidateKey> {
    let mut keys = Vec::with_capacity(4);
    if let Some(size) = size {
        if count != 1 {
            keys.push(CandidateKey {
                key: format!("{family}-COWORK-{count}P-L{size}"),
                strategy: MatchStrategy::SpecificSize,
            });
        }
    }
    for key in [
        format!("{family} {count}P"),
        format!("{count}P {family}"),
        format!("{family}-{count}P"),
    ] {
        keys.push(CandidateKey {
            key,
            strategy: MatchStrategy::GenericFamily,
        });
    }
    keys
}

/// Ordered, immutable rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<MatchRule>,
    strip_prefixes: Vec<String>,
}

impl RuleTable {
    /// Compile the rule table from matcher configuration.
    ///
    /// Fails with `QuoteError::Config` when an alias pattern is not a valid regex.
    pub fn from_config(config: &MatcherConfig) -> QuoteResult<Self> {
        let mut rules = vec![structured_rule()];

        for family in &config.families {
            if let Some(rule) = family_text_rule(family)? {
                rules.push(rule);
            }
        }

        for alias in &config.aliases {
            rules.push(alias_rule(alias)?);
        }

        Ok(Self {
            rules,
            strip_prefixes: config.strip_prefixes.clone(),
        })
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// Inputs the rules are evaluated against: `(code_input, description_input)`.
    pub fn prepare_inputs(&self, raw: &str) -> (String, String) {
        let code_input = normalize_code(raw);
        let description = normalize_description(raw);
        let description_input = strip_known_prefixes(&description, &self.strip_prefixes);
        (code_input, description_input)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_config(&MatcherConfig::default()).unwrap_or_else(|e| {
            log::error!("Default matcher rules failed to compile: {e}");
            Self {
                rules: vec![structured_rule()],
                strip_prefixes: Vec::new(),
            }
        })
    }
}

fn structured_rule() -> MatchRule {
    MatchRule {
        name: STRUCTURED_RULE.to_string(),
        input: RuleInput::Code,
        pattern: RE_STRUCTURED.clone(),
        resolution: Resolution::FamilySeats { family: None },
    }
}

/// Natural-language rule for one family: `"FLEX 4 PERSON"`, `"6 SEATER FLX"`.
fn family_text_rule(family: &FamilyConfig) -> QuoteResult<Option<MatchRule>> {
    let name = normalize_description(&family.family);
    if name.is_empty() {
        log::warn!("Skipping matcher family with empty name");
        return Ok(None);
    }

    let mut spellings: Vec<String> = std::iter::once(name.clone())
        .chain(family.aliases.iter().map(|a| normalize_description(a)))
        .filter(|s| !s.is_empty())
        .map(|s| regex::escape(&s))
        .collect();
    spellings.sort();
    spellings.dedup();
    let names = spellings.join("|");

    let pattern = format!(
        r"\b(?:{names})\b(?:\s+COWORK(?:ING)?)?\s*(?P<count>\d{{1,2}})\s*{SEAT_WORDS}\b|\b(?P<rcount>\d{{1,2}})\s*{SEAT_WORDS}\s+(?:{names})\b"
    );
    let pattern = Regex::new(&pattern)
        .map_err(|e| QuoteError::Config(format!("Invalid family pattern for '{name}': {e}")))?;

    Ok(Some(MatchRule {
        name: format!("{}-seat-text", name.to_lowercase().replace(' ', "-")),
        input: RuleInput::Description,
        pattern,
        resolution: Resolution::FamilySeats { family: Some(name) },
    }))
}

fn alias_rule(alias: &AliasConfig) -> QuoteResult<MatchRule> {
    let pattern = Regex::new(&format!("(?i){}", alias.pattern)).map_err(|e| {
        QuoteError::Config(format!("Invalid alias pattern '{}': {e}", alias.name))
    })?;
    Ok(MatchRule {
        name: alias.name.clone(),
        input: RuleInput::Description,
        pattern,
        resolution: Resolution::Codes(alias.codes.clone()),
    })
}

#[cfg(test)]
#[path = "tests/rules_tests.rs"]
mod tests;
