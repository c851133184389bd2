//! Absolute resource identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An absolute IRI, immutable once constructed.
///
/// The scheme is lowercased on construction; everything after the scheme is
/// kept byte for byte. Equality, hashing and ordering all use this
/// canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(String);

impl Iri {
    /// Parse an absolute IRI.
    ///
    /// Accepts anything of the form `scheme:rest` where `scheme` matches
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` and `rest` is non-empty
    /// and free of whitespace and control characters.
    pub fn parse(s: &str) -> Result<Self> {
        let colon = s
            .find(':')
            .ok_or_else(|| Error::InvalidIri(format!("{s:?} has no scheme")))?;
        let (scheme, rest) = (&s[..colon], &s[colon + 1..]);

        if !is_scheme(scheme) {
            return Err(Error::InvalidIri(format!("{s:?} has an invalid scheme")));
        }
        if rest.is_empty() {
            return Err(Error::InvalidIri(format!("{s:?} is empty after the scheme")));
        }
        if rest.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::InvalidIri(format!("{s:?} contains whitespace or control characters")));
        }

        Ok(Self(format!("{}:{}", scheme.to_ascii_lowercase(), rest)))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercased scheme, without the trailing colon.
    pub fn scheme(&self) -> &str {
        // parse() guarantees a colon
        self.0.split_once(':').map_or("", |(scheme, _)| scheme)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();
    !bytes.is_empty()
        && bytes[0].is_ascii_alphabetic()
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iri {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute() {
        for s in [
            "http://example.org/abc",
            "https://www.w3.org/ns/activitystreams",
            "urn:isbn:0451450523",
            "did:example:123",
            "mailto:user@example.com",
        ] {
            assert_eq!(Iri::parse(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn test_parse_rejects_relative() {
        assert!(Iri::parse("miles").is_err());
        assert!(Iri::parse("/path/only").is_err());
        assert!(Iri::parse("1http://x").is_err());
        assert!(Iri::parse("http:").is_err());
        assert!(Iri::parse("http://exa mple.org").is_err());
    }

    #[test]
    fn test_scheme_is_canonicalized() {
        let a = Iri::parse("HTTP://example.org/A").unwrap();
        let b = Iri::parse("http://example.org/A").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.scheme(), "http");
        // Only the scheme is case-folded
        assert_ne!(a, Iri::parse("http://example.org/a").unwrap());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let iri: Iri = serde_json::from_str("\"http://a\"").unwrap();
        assert_eq!(serde_json::to_string(&iri).unwrap(), "\"http://a\"");
        assert!(serde_json::from_str::<Iri>("\"nope\"").is_err());
    }
}
