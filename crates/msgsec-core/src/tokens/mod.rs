//! Opaque session token handles.
//!
//! Token issuance, renewal windows, and key sets belong to the token layer.
//! Failures only carry immutable handles naming the tokens that were in play,
//! enough for a handler to decide between renewal, re-key, and rejection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Session/credential artifact binding an entity to its session state.
///
/// Immutable once constructed; shared into failures behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterToken {
    serial_number: u64,
    sequence_number: u64,
    identity: String,
}

impl MasterToken {
    #[must_use]
    pub fn new(serial_number: u64, sequence_number: u64, identity: impl Into<String>) -> Self {
        Self {
            serial_number,
            sequence_number,
            identity: identity.into(),
        }
    }

    /// Serial number identifying this token across renewals.
    #[must_use]
    pub fn serial_number(&self) -> u64 {
        self.serial_number
    }

    /// Sequence number incremented on each renewal.
    #[must_use]
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    /// Entity identity the token was issued to.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl fmt::Display for MasterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "master token {}/{} for {}",
            self.serial_number, self.sequence_number, self.identity
        )
    }
}

/// User-scoped session token, bound to a [`MasterToken`] by serial number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdToken {
    serial_number: u64,
    master_token_serial: u64,
    user_id: String,
}

impl UserIdToken {
    #[must_use]
    pub fn new(serial_number: u64, master_token_serial: u64, user_id: impl Into<String>) -> Self {
        Self {
            serial_number,
            master_token_serial,
            user_id: user_id.into(),
        }
    }

    /// Serial number identifying this token.
    #[must_use]
    pub fn serial_number(&self) -> u64 {
        self.serial_number
    }

    /// Serial number of the master token this token is bound to.
    #[must_use]
    pub fn master_token_serial(&self) -> u64 {
        self.master_token_serial
    }

    /// User identity the token was issued to.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl fmt::Display for UserIdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user id token {} for {} (master token {})",
            self.serial_number, self.user_id, self.master_token_serial
        )
    }
}
