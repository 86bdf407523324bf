//! Path Pattern Module
//!
//! Compiles path masks such as `/v1/notifications/{id}/status` into
//! segment matchers.

use std::fmt;

use crate::error::ConfigError;

// == Segment ==
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must equal the path segment byte for byte
    Literal(String),
    /// Matches any single non-empty path segment
    Placeholder(String),
}

impl Segment {
    fn parse(raw: &str) -> std::result::Result<Self, &'static str> {
        if raw.is_empty() {
            return Err("empty segment");
        }

        if let Some(inner) = raw.strip_prefix('{') {
            let name = inner
                .strip_suffix('}')
                .ok_or("unterminated placeholder")?;
            if name.is_empty() {
                return Err("empty placeholder name");
            }
            if name.contains(['{', '}']) {
                return Err("nested braces in placeholder");
            }
            return Ok(Segment::Placeholder(name.to_string()));
        }

        if raw.contains(['{', '}']) {
            return Err("braces must wrap a whole segment");
        }

        Ok(Segment::Literal(raw.to_string()))
    }

    fn matches(&self, part: &str) -> bool {
        match self {
            Segment::Literal(literal) => literal == part,
            Segment::Placeholder(_) => !part.is_empty(),
        }
    }
}

// == Path Pattern ==
/// A compiled path mask.
///
/// Matching is anchored at both ends and ignores one trailing slash on
/// either the mask or the concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    mask: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    // == Compile ==
    /// Compiles a path mask.
    ///
    /// # Errors
    /// Returns `ConfigError::MalformedMask` when the mask does not start
    /// with `/`, contains an empty interior segment, or uses braces
    /// anywhere other than around a whole segment.
    pub fn compile(mask: &str) -> Result<Self, ConfigError> {
        let malformed = |reason| ConfigError::MalformedMask {
            mask: mask.to_string(),
            reason,
        };

        let body = mask
            .strip_prefix('/')
            .ok_or_else(|| malformed("mask must start with '/'"))?;
        let body = body.strip_suffix('/').unwrap_or(body);

        let segments = if body.is_empty() {
            Vec::new()
        } else {
            body.split('/')
                .map(Segment::parse)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(malformed)?
        };

        Ok(Self {
            mask: mask.to_string(),
            segments,
        })
    }

    // == Matches ==
    /// Tests a concrete URL path (no query string) against the pattern.
    pub fn matches(&self, path: &str) -> bool {
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if self.segments.is_empty() {
            return rest.is_empty();
        }

        let mut parts = rest.split('/');
        for segment in &self.segments {
            match parts.next() {
                Some(part) if segment.matches(part) => {}
                _ => return false,
            }
        }

        parts.next().is_none()
    }

    /// Returns the mask this pattern was compiled from.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Names of the placeholder segments, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mask)
    }
}
