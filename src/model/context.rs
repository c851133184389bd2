//! Namespace contexts: which vocabularies a value needs, and under which
//! alias each one is imported.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How [`ContextMap::merge`] resolves two aliases for the same namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasPolicy {
    /// Keep the alias already present.
    #[default]
    FirstWins,
    /// Replace with the incoming alias.
    LastWins,
    /// Fail with [`Error::AliasConflict`].
    Reject,
}

/// Mapping from namespace URI to the alias used to import it.
///
/// An empty alias means the namespace is the document's default
/// vocabulary and its terms are written unprefixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextMap(HashMap<String, String>);

impl ContextMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// A map holding exactly one entry.
    pub fn with_entry(namespace: impl Into<String>, alias: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(namespace, alias);
        map
    }

    /// Insert or overwrite the alias for `namespace`, returning the old one.
    pub fn insert(&mut self, namespace: impl Into<String>, alias: impl Into<String>) -> Option<String> {
        self.0.insert(namespace.into(), alias.into())
    }

    pub fn alias_for(&self, namespace: &str) -> Option<&str> {
        self.0.get(namespace).map(String::as_str)
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.0.contains_key(namespace)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(ns, alias)| (ns.as_str(), alias.as_str()))
    }

    /// Entries sorted by namespace URI, for deterministic output.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries
    }

    /// Add every entry of `other` whose namespace is not present yet.
    pub fn union(&mut self, other: ContextMap) {
        for (namespace, alias) in other.0 {
            self.0.entry(namespace).or_insert(alias);
        }
    }

    /// Merge `other` into `self`, resolving alias collisions per `policy`.
    ///
    /// With [`AliasPolicy::Reject`] the map is left untouched on error.
    pub fn merge(&mut self, other: &ContextMap, policy: AliasPolicy) -> Result<()> {
        if policy == AliasPolicy::Reject {
            for (namespace, alias) in other.iter() {
                if let Some(existing) = self.alias_for(namespace) {
                    if existing != alias {
                        return Err(Error::AliasConflict {
                            namespace: namespace.to_string(),
                            existing: existing.to_string(),
                            requested: alias.to_string(),
                        });
                    }
                }
            }
        }

        for (namespace, alias) in other.iter() {
            match self.0.get_mut(namespace) {
                None => {
                    self.0.insert(namespace.to_string(), alias.to_string());
                }
                Some(existing) if existing != alias => {
                    tracing::warn!(
                        namespace,
                        existing = %existing,
                        requested = alias,
                        ?policy,
                        "Conflicting aliases for namespace"
                    );
                    if policy == AliasPolicy::LastWins {
                        *existing = alias.to_string();
                    }
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl<N: Into<String>, A: Into<String>> FromIterator<(N, A)> for ContextMap {
    fn from_iter<I: IntoIterator<Item = (N, A)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, a)| (n.into(), a.into())).collect())
    }
}
