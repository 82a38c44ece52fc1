//! Opaque entity authentication context.
//!
//! The real entity authentication model (scheme negotiation, proof
//! verification) lives in the authentication layer. Failures only need an
//! immutable handle identifying *who* was being authenticated when things
//! went wrong, so that is all this type carries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity-proof material for a communicating entity.
///
/// Immutable once constructed. Failures hold it behind an `Arc`; ownership of
/// the underlying data stays with the authentication layer that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAuthenticationData {
    scheme: String,
    identity: String,
}

impl EntityAuthenticationData {
    #[must_use]
    pub fn new(scheme: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            identity: identity.into(),
        }
    }

    /// Authentication scheme this data was produced under.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Entity identity asserted by this data.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl fmt::Display for EntityAuthenticationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identity, self.scheme)
    }
}
