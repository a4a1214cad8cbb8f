//! Per-locale resource trees
//!
//! A tree is exactly two levels deep: namespace → leaf key → entry. Provider
//! data that would nest deeper, or that supplies a non-string leaf, is kept as
//! an [`Entry::Unsupported`] marker so lookups can report it instead of
//! panicking.

use std::collections::HashMap;

use crate::error::LoadError;

/// A leaf value inside a namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A template string, possibly containing `{identifier}` placeholders
    Text(String),
    /// A value the provider supplied that is not a string (`table`, `integer`, ...)
    Unsupported(&'static str),
}

impl Entry {
    /// The template text, if this entry is a terminal string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text),
            Entry::Unsupported(_) => None,
        }
    }
}

/// Leaf keys of one namespace
pub type Namespace = HashMap<String, Entry>;

/// Immutable translation table for a single locale
#[derive(Debug, Clone, Default)]
pub struct ResourceTree {
    namespaces: HashMap<String, Namespace>,
}

impl ResourceTree {
    pub fn builder() -> TreeBuilder {
        TreeBuilder::default()
    }

    /// Build a tree from a parsed TOML document.
    ///
    /// Top-level tables become namespaces. Top-level values that are not tables
    /// are skipped; non-string values inside a namespace become unsupported entries.
    pub fn from_table(table: toml::Table) -> Result<Self, LoadError> {
        let mut builder = Self::builder();
        for (namespace, value) in table {
            let leaves = match value {
                toml::Value::Table(leaves) => leaves,
                other => {
                    tracing::warn!(
                        namespace = %namespace,
                        kind = other.type_str(),
                        "skipping top-level value that is not a namespace table"
                    );
                    continue;
                }
            };
            builder.namespace(&namespace)?;
            for (key, value) in leaves {
                match value {
                    toml::Value::String(text) => builder.insert(&namespace, key, text)?,
                    other => builder.insert_unsupported(&namespace, key, other.type_str())?,
                };
            }
        }
        Ok(builder.build())
    }

    /// Parse TOML text into a tree. `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, LoadError> {
        let table: toml::Table = toml::from_str(content).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        Self::from_table(table)
    }

    /// Look up the namespace mapping
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Look up a single entry
    pub fn get(&self, namespace: &str, key: &str) -> Option<&Entry> {
        self.namespaces.get(namespace).and_then(|ns| ns.get(key))
    }

    /// Namespace names, sorted
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.namespaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All `namespace.key` paths that resolve to text, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .namespaces
            .iter()
            .flat_map(|(ns, leaves)| {
                leaves
                    .iter()
                    .filter(|(_, entry)| entry.as_text().is_some())
                    .map(move |(key, _)| format!("{}.{}", ns, key))
            })
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over every `(namespace, key, entry)` triple
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &Entry)> {
        self.namespaces.iter().flat_map(|(ns, leaves)| {
            leaves
                .iter()
                .map(move |(key, entry)| (ns.as_str(), key.as_str(), entry))
        })
    }

    /// Number of leaf entries across all namespaces
    pub fn len(&self) -> usize {
        self.namespaces.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Incremental construction of a [`ResourceTree`]
#[derive(Debug, Default)]
pub struct TreeBuilder {
    namespaces: HashMap<String, Namespace>,
}

impl TreeBuilder {
    /// Ensure a namespace exists, even if it ends up empty
    pub fn namespace(&mut self, name: &str) -> Result<&mut Self, LoadError> {
        check_names(name, None)?;
        self.namespaces.entry(name.to_string()).or_default();
        Ok(self)
    }

    /// Add a template string. Fails if the key already exists in the namespace.
    pub fn insert(
        &mut self,
        namespace: &str,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut Self, LoadError> {
        self.put(namespace, key.into(), Entry::Text(text.into()))
    }

    /// Record a non-string value so lookups can report it
    pub fn insert_unsupported(
        &mut self,
        namespace: &str,
        key: impl Into<String>,
        kind: &'static str,
    ) -> Result<&mut Self, LoadError> {
        self.put(namespace, key.into(), Entry::Unsupported(kind))
    }

    fn put(&mut self, namespace: &str, key: String, entry: Entry) -> Result<&mut Self, LoadError> {
        check_names(namespace, Some(&key))?;
        let leaves = self.namespaces.entry(namespace.to_string()).or_default();
        if leaves.contains_key(&key) {
            return Err(LoadError::DuplicateKey {
                namespace: namespace.to_string(),
                key,
            });
        }
        leaves.insert(key, entry);
        Ok(self)
    }

    pub fn build(self) -> ResourceTree {
        ResourceTree {
            namespaces: self.namespaces,
        }
    }
}

/// Key paths are split on `.`, so a name containing one could never be looked up
fn check_names(namespace: &str, key: Option<&str>) -> Result<(), LoadError> {
    let bad_namespace = namespace.is_empty() || namespace.contains('.');
    let bad_key = key.is_some_and(|k| k.contains('.'));
    if bad_namespace || bad_key {
        return Err(LoadError::InvalidKey {
            namespace: namespace.to_string(),
            key: key.unwrap_or_default().to_string(),
        });
    }
    Ok(())
}
