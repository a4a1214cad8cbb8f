//! Key path resolution against a single resource tree

use std::fmt;

use crate::model::{Entry, ResourceTree};

/// Why a key path did not resolve to a template string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The namespace segment is empty or absent from the tree
    NoNamespace,
    /// The namespace exists but has no such leaf key
    NoKey,
    /// The path names a mapping, a non-string value, or continues past a leaf
    NotLeaf,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::NoNamespace => write!(f, "no such namespace"),
            MissReason::NoKey => write!(f, "no such key"),
            MissReason::NotLeaf => write!(f, "not a string leaf"),
        }
    }
}

/// A failed lookup. Absorbed by the translation service, never shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    pub key_path: String,
    pub reason: MissReason,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.key_path, self.reason)
    }
}

/// Stateless `namespace.leaf` lookup. Knows nothing about locales or fallback.
pub struct KeyResolver;

impl KeyResolver {
    pub fn resolve<'t>(tree: &'t ResourceTree, key_path: &str) -> Result<&'t str, Miss> {
        let miss = |reason| Miss {
            key_path: key_path.to_string(),
            reason,
        };

        let mut segments = key_path.split('.');
        let namespace = segments.next().unwrap_or_default();
        if namespace.is_empty() {
            return Err(miss(MissReason::NoNamespace));
        }
        let leaves = tree
            .namespace(namespace)
            .ok_or_else(|| miss(MissReason::NoNamespace))?;

        // "common" on its own names the whole namespace mapping
        let leaf = segments.next().ok_or_else(|| miss(MissReason::NotLeaf))?;
        let entry = leaves.get(leaf).ok_or_else(|| miss(MissReason::NoKey))?;

        if segments.next().is_some() {
            return Err(miss(MissReason::NotLeaf));
        }

        match entry {
            Entry::Text(text) => Ok(text.as_str()),
            Entry::Unsupported(_) => Err(miss(MissReason::NotLeaf)),
        }
    }
}
