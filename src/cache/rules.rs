//! Path Rules Module
//!
//! Ordered set of cacheable path patterns and their TTLs.

use crate::cache::PathPattern;
use crate::error::ConfigError;

// == Path Rule ==
/// A compiled pattern paired with the TTL (seconds) of the responses it caches.
#[derive(Debug, Clone)]
pub struct PathRule {
    pub pattern: PathPattern,
    pub ttl: u64,
}

// == Rule Set ==
/// Cacheable endpoints in configured order.
///
/// Built once at startup and read-only afterwards. The first rule whose
/// pattern matches a path decides its TTL.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<PathRule>,
}

impl RuleSet {
    // == Compile ==
    /// Compiles `(mask, ttl)` pairs, keeping their order.
    ///
    /// Fails on the first malformed mask.
    pub fn compile<I, S>(endpoints: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let rules = endpoints
            .into_iter()
            .map(|(mask, ttl)| {
                Ok(PathRule {
                    pattern: PathPattern::compile(mask.as_ref())?,
                    ttl,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { rules })
    }

    // == Match TTL ==
    /// Returns the TTL of the first rule matching `path`.
    pub fn match_ttl(&self, path: &str) -> Option<u64> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.ttl)
    }

    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
