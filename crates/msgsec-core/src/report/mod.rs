//! Stable serialized rendering of a fully enriched failure.
//!
//! When a failure has to cross a process or persistence boundary (diagnostic
//! logs, support tooling, a peer's error store), the live value cannot travel:
//! its cause chain holds arbitrary error types. [`FailureReport`] captures
//! the classifier, detail, a textual rendering of the cause chain, and any
//! attached identity context in a versioned form that can be re-read by other
//! versions of the software. Collaborator handles serialize in their own
//! formats; this module only embeds them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::EntityAuthenticationData;
use crate::catalog::{ErrorCode, ResponseCode};
use crate::failure::{ErrorCategory, MessagingError};
use crate::tokens::{MasterToken, UserIdToken};

/// Current report format version.
pub const REPORT_VERSION: u32 = 1;

/// Versioned snapshot of a [`MessagingError`] for external consumption.
///
/// Read-only once captured; the live failure value stays the source of truth
/// within the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Format version, currently [`REPORT_VERSION`].
    pub version: u32,
    /// Classifier name.
    pub code: ErrorCode,
    /// Stable numeric id of the classifier.
    pub numeric_code: u16,
    /// Remediation path for the classifier.
    pub response_code: ResponseCode,
    /// Structural category the failure was raised in.
    pub category: ErrorCategory,
    /// Detail text recorded at construction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Textual rendering of the cause chain, outermost failure first.
    pub cause_chain: Vec<String>,
    /// Message id attached while propagating, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<u64>,
    /// Entity authentication data attached while propagating, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_auth_data: Option<EntityAuthenticationData>,
    /// Master token attached while propagating, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_token: Option<MasterToken>,
    /// User id token attached while propagating, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_token: Option<UserIdToken>,
}

impl FailureReport {
    /// Capture a snapshot of a failure.
    #[must_use]
    pub fn capture(failure: &MessagingError) -> Self {
        let cause_chain: Vec<String> = failure.chain().map(ToString::to_string).collect();
        debug!(
            code = ?failure.code(),
            links = cause_chain.len(),
            "captured failure report"
        );
        Self {
            version: REPORT_VERSION,
            code: failure.code(),
            numeric_code: failure.code().numeric_code(),
            response_code: failure.code().response_code(),
            category: failure.category(),
            detail: failure.detail().map(ToOwned::to_owned),
            cause_chain,
            message_id: failure.message_id(),
            entity_auth_data: failure.entity_auth_data().cloned(),
            master_token: failure.master_token().cloned(),
            user_id_token: failure.user_id_token().cloned(),
        }
    }
}

impl From<&MessagingError> for FailureReport {
    fn from(failure: &MessagingError) -> Self {
        Self::capture(failure)
    }
}
