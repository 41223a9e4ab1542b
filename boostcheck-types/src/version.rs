use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A three-part `major.minor.patch` version in the narrow convention Booster
/// packages publish under.
///
/// Deliberately stricter than the full semantic-versioning grammar: no
/// pre-release tags, no build metadata, no ranges. A string parses only if it
/// has exactly three dot-separated numeric components.
///
/// Ordering is lexicographic over `(major, minor, patch)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            major,
            minor,
            patch,
        } = self;
        write!(f, "{major}.{minor}.{patch}")
    }
}

/// A version string that does not follow the `X.Y.Z` convention.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedVersion {
    /// Wrong number of dot-separated components (must be exactly three).
    #[error("version '{input}' must follow the X.Y.Z convention with exactly three components")]
    WrongLength { input: String },

    /// A component is empty, non-numeric, or too large.
    #[error("version '{input}' has a non-numeric component '{component}'")]
    NotANumber { input: String, component: String },
}

impl FromStr for SemanticVersion {
    type Err = MalformedVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(MalformedVersion::WrongLength {
                input: s.to_string(),
            });
        }
        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            // `u32::from_str` would also accept a leading '+'; digits only.
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MalformedVersion::NotANumber {
                    input: s.to_string(),
                    component: (*part).to_string(),
                });
            }
            *slot = part.parse().map_err(|_| MalformedVersion::NotANumber {
                input: s.to_string(),
                component: (*part).to_string(),
            })?;
        }
        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl From<SemanticVersion> for String {
    fn from(version: SemanticVersion) -> Self {
        version.to_string()
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = MalformedVersion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
