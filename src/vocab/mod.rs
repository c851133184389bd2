//! Vocabulary constants and the property table.
//!
//! Constants are organized by vocabulary:
//! - top level - namespace URIs
//! - `properties` - one cell type per ActivityStreams term

pub mod properties;

/// ActivityStreams 2.0 namespace.
pub const ACTIVITY_STREAMS: &str = "https://www.w3.org/ns/activitystreams";

/// W3C security vocabulary, commonly imported alongside ActivityStreams.
pub const SECURITY_V1: &str = "https://w3id.org/security/v1";

/// Prefix `term` with `alias:` unless the alias is empty.
pub fn qualify(alias: &str, term: &str) -> String {
    if alias.is_empty() {
        term.to_string()
    } else {
        format!("{alias}:{term}")
    }
}
