//! Document-level settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{AliasPolicy, ContextMap};
use crate::vocab::ACTIVITY_STREAMS;
use crate::{Error, Result};

/// Settings applied by [`crate::to_document`] and [`crate::from_document`].
///
/// ```json
/// {
///   "context": {"https://www.w3.org/ns/activitystreams": ""},
///   "alias_policy": "first_wins",
///   "normalize": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabConfig {
    /// Namespaces declared on every document, namespace URI → alias.
    pub context: ContextMap,
    /// How alias collisions between `context` and an entity are resolved.
    pub alias_policy: AliasPolicy,
    /// Normalize multi-valued properties before writing a document.
    pub normalize: bool,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            context: ContextMap::with_entry(ACTIVITY_STREAMS, ""),
            alias_policy: AliasPolicy::default(),
            normalize: false,
        }
    }
}

impl VocabConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Two namespaces may not share a non-empty alias.
    fn validate(&self) -> Result<()> {
        let mut seen: Vec<(&str, &str)> = Vec::with_capacity(self.context.len());
        for (namespace, alias) in self.context.sorted() {
            if alias.is_empty() {
                continue;
            }
            if let Some((other, _)) = seen.iter().find(|(_, a)| *a == alias) {
                return Err(Error::Config(format!(
                    "alias '{alias}' is bound to both {other} and {namespace}"
                )));
            }
            seen.push((namespace, alias));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = VocabConfig::default();
        assert_eq!(config.context.alias_for(ACTIVITY_STREAMS), Some(""));
        assert_eq!(config.alias_policy, AliasPolicy::FirstWins);
        assert!(!config.normalize);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = VocabConfig::from_json_str(r#"{"alias_policy": "reject"}"#).unwrap();
        assert_eq!(config.alias_policy, AliasPolicy::Reject);
        assert_eq!(config.context, VocabConfig::default().context);
    }

    #[test]
    fn test_context_from_json() {
        let config = VocabConfig::from_json_str(
            r#"{"context": {"https://www.w3.org/ns/activitystreams": "as"}, "normalize": true}"#,
        )
        .unwrap();
        assert_eq!(config.context.alias_for(ACTIVITY_STREAMS), Some("as"));
        assert!(config.normalize);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(VocabConfig::from_json_str("{"), Err(Error::Json(_))));
        assert!(matches!(
            VocabConfig::from_json_str(r#"{"context": {"http://a": "x", "http://b": "x"}}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            VocabConfig::from_path("/nonexistent/astreams.json"),
            Err(Error::Io(_))
        ));
    }
}
