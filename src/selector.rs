use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which part of a version a bump targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selector {
    /// The prerelease counter when there is one, otherwise the last segment.
    #[default]
    Auto,
    /// A zero-based segment index. `len(segments)` means the prerelease.
    Index(usize),
    /// The prerelease position, whatever the segment count.
    Pre,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized segment: '{0}'")]
pub struct SelectorError(pub String);

impl Selector {
    /// Turns the selector into a concrete index for a version with
    /// `segment_count` segments.
    pub fn resolve(self, segment_count: usize, has_prerelease: bool) -> usize {
        match self {
            Selector::Index(index) => index,
            Selector::Pre => segment_count,
            Selector::Auto if has_prerelease => segment_count,
            Selector::Auto => segment_count.saturating_sub(1),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Selector::Auto);
        }
        if let Ok(index) = trimmed.parse::<usize>() {
            return Ok(Selector::Index(index));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "major" => Ok(Selector::Index(0)),
            "minor" => Ok(Selector::Index(1)),
            "patch" => Ok(Selector::Index(2)),
            "pre" => Ok(Selector::Pre),
            _ => Err(SelectorError(s.to_owned())),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Auto => f.write_str("auto"),
            Selector::Index(index) => write!(f, "{}", index),
            Selector::Pre => f.write_str("pre"),
        }
    }
}
