//! Locale identifiers

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ConfigError;

/// A canonicalized locale tag such as `zh-TW` or `en-US`.
///
/// Parsing accepts `_` as a separator and any letter case, then normalizes:
/// language subtag lowercase, two-letter region uppercase, four-letter script
/// titlecase, anything else lowercase. Clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId(Arc<str>);

impl LocaleId {
    /// Parse and canonicalize a locale tag
    pub fn parse(tag: &str) -> Result<Self, ConfigError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ConfigError::InvalidLocale(tag.to_string()));
        }

        let mut canonical = String::with_capacity(tag.len());
        for (i, subtag) in tag.split(['-', '_']).enumerate() {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(ConfigError::InvalidLocale(tag.to_string()));
            }
            if i > 0 {
                canonical.push('-');
            }
            canonical.push_str(&canonical_subtag(i, subtag));
        }

        Ok(Self(canonical.into()))
    }

    /// The canonical tag text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`zh` for `zh-TW`)
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

fn canonical_subtag(position: usize, subtag: &str) -> String {
    if position == 0 {
        return subtag.to_ascii_lowercase();
    }
    match subtag.len() {
        2 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => subtag.to_ascii_uppercase(),
        4 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => lower,
            }
        }
        _ => subtag.to_ascii_lowercase(),
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
