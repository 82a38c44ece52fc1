//! Contextual failure values for the messaging security layer.
//!
//! A [`MessagingError`] is created at the deepest layer that can observe a
//! problem, carrying only its [`ErrorCode`] (plus optional detail text and
//! the causing error). As the value unwinds through the stack, each layer
//! that holds identity context not yet attached enriches it in place with the
//! chainable `with_*` setters and passes the same value up its own error
//! channel. The top-level handler reads the fully enriched value to decide
//! remediation; the failure itself is inert data and contains no recovery
//! logic.
//!
//! Classifier, detail, and cause are fixed at construction and never change.
//! The enrichment fields start absent and may be overwritten; the last write
//! wins.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use msgsec_core::catalog::ErrorCode;
//! use msgsec_core::failure::MessagingError;
//! use msgsec_core::tokens::MasterToken;
//!
//! fn verify_signature() -> Result<(), MessagingError> {
//!     Err(MessagingError::crypto(ErrorCode::SignatureInvalid)
//!         .with_detail("bad signature on token"))
//! }
//!
//! fn verify_session(token: &Arc<MasterToken>) -> Result<(), MessagingError> {
//!     // Catch, enrich, rethrow as a single expression.
//!     verify_signature().map_err(|e| e.with_master_token(Arc::clone(token)))
//! }
//!
//! let token = Arc::new(MasterToken::new(1, 1, "entity-1"));
//! let err = verify_session(&token).unwrap_err();
//! assert!(err.is_crypto());
//! assert_eq!(err.master_token().map(MasterToken::serial_number), Some(1));
//! ```

use std::error::Error as StdError;
use std::iter;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::auth::EntityAuthenticationData;
use crate::catalog::{ErrorCode, ResponseCode};
use crate::tokens::{MasterToken, UserIdToken};

/// Largest message id accepted by the protocol (2^53).
///
/// Message ids must stay exactly representable in an IEEE-754 double so that
/// peers on runtimes without 64-bit integers agree on them.
pub const MAX_MESSAGE_ID: u64 = 9_007_199_254_740_992;

/// Coarse structural category of a failure, used for catch-site routing.
///
/// The category says which subsystem raised the failure; the [`ErrorCode`]
/// says why it failed. The two are orthogonal: a crypto failure and an
/// encoding failure may carry the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Failure with no more specific subsystem.
    General,
    /// Failure originating in a cryptographic operation (signing, encryption,
    /// key agreement, digest). Handlers typically respond by triggering key
    /// renegotiation before inspecting the code.
    Crypto,
    /// Failure while parsing or encoding messages and tokens.
    Encoding,
    /// Failure in entity authentication.
    EntityAuth,
    /// Failure in user authentication.
    UserAuth,
    /// Failure while validating or applying a token.
    Token,
    /// Failure during key exchange.
    KeyExchange,
    /// Failure in message processing.
    Message,
    /// Unexpected internal failure.
    Internal,
}

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A failure propagating out of the messaging security layer.
///
/// Created with [`new`](MessagingError::new) (or a categorized constructor
/// such as [`crypto`](MessagingError::crypto)), optionally completed with
/// [`with_detail`](MessagingError::with_detail) and
/// [`with_cause`](MessagingError::with_cause) at the point of failure, then
/// enriched with identity context by intermediate layers. All setters consume
/// and return the value, so enrichment moves the failure rather than copying
/// it and the category survives any chain of calls.
#[derive(Debug, Error)]
#[error("{}", render(.code, .detail))]
pub struct MessagingError {
    code: ErrorCode,
    category: ErrorCategory,
    detail: Option<String>,
    #[source]
    cause: Option<Cause>,
    entity_auth_data: Option<Arc<EntityAuthenticationData>>,
    master_token: Option<Arc<MasterToken>>,
    user_id_token: Option<Arc<UserIdToken>>,
    message_id: Option<u64>,
}

fn render(code: &ErrorCode, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("{} [{detail}]", code.message()),
        None => code.message().to_owned(),
    }
}

impl MessagingError {
    /// Create a failure with only a classifier.
    #[must_use]
    pub fn new(code: ErrorCode) -> Self {
        Self::in_category(ErrorCategory::General, code)
    }

    /// Create a crypto-category failure.
    #[must_use]
    pub fn crypto(code: ErrorCode) -> Self {
        Self::in_category(ErrorCategory::Crypto, code)
    }

    /// Create a failure in an explicit category.
    #[must_use]
    pub fn in_category(category: ErrorCategory, code: ErrorCode) -> Self {
        Self {
            code,
            category,
            detail: None,
            cause: None,
            entity_auth_data: None,
            master_token: None,
            user_id_token: None,
            message_id: None,
        }
    }

    /// Add diagnostic detail text. Construction-phase only.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Wrap the underlying failure that triggered this one.
    ///
    /// The cause is stored as passed and exposed unmodified through
    /// [`cause`](MessagingError::cause) and [`std::error::Error::source`];
    /// its own chain stays reachable. Construction-phase only.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Attach the entity authentication data in play when the failure arose.
    ///
    /// Chainable enrichment: returns the same value so an intermediate layer
    /// can enrich and re-raise in one expression. Calling again overwrites.
    #[must_use]
    pub fn with_entity_auth_data(mut self, data: Arc<EntityAuthenticationData>) -> Self {
        trace!(code = ?self.code, identity = %data.identity(), "attaching entity auth data to failure");
        self.entity_auth_data = Some(data);
        self
    }

    /// Attach the master token in play when the failure arose.
    ///
    /// Same contract as [`with_entity_auth_data`](Self::with_entity_auth_data).
    #[must_use]
    pub fn with_master_token(mut self, token: Arc<MasterToken>) -> Self {
        trace!(code = ?self.code, serial = token.serial_number(), "attaching master token to failure");
        self.master_token = Some(token);
        self
    }

    /// Attach the user id token in play when the failure arose.
    ///
    /// Same contract as [`with_entity_auth_data`](Self::with_entity_auth_data).
    #[must_use]
    pub fn with_user_id_token(mut self, token: Arc<UserIdToken>) -> Self {
        trace!(code = ?self.code, serial = token.serial_number(), "attaching user id token to failure");
        self.user_id_token = Some(token);
        self
    }

    /// Attach the protocol message id of the offending message.
    ///
    /// Ids above [`MAX_MESSAGE_ID`] are a caller bug; checked in debug builds
    /// only, since a failure value must never panic while propagating.
    #[must_use]
    pub fn with_message_id(mut self, message_id: u64) -> Self {
        debug_assert!(
            message_id <= MAX_MESSAGE_ID,
            "message id out of range: {message_id}"
        );
        self.message_id = Some(message_id);
        self
    }

    /// The classifier this failure was constructed with.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The structural category this failure was raised in.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Whether this failure originated in a cryptographic operation.
    #[must_use]
    pub fn is_crypto(&self) -> bool {
        self.category == ErrorCategory::Crypto
    }

    /// Remediation path for this failure's code.
    #[must_use]
    pub fn response_code(&self) -> ResponseCode {
        self.code.response_code()
    }

    /// Diagnostic detail text, if any was recorded at construction.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The underlying failure that triggered this one, if any.
    ///
    /// Same value as [`std::error::Error::source`].
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        StdError::source(self)
    }

    /// Entity authentication data attached while propagating, if any.
    #[must_use]
    pub fn entity_auth_data(&self) -> Option<&EntityAuthenticationData> {
        self.entity_auth_data.as_deref()
    }

    /// Master token attached while propagating, if any.
    #[must_use]
    pub fn master_token(&self) -> Option<&MasterToken> {
        self.master_token.as_deref()
    }

    /// User id token attached while propagating, if any.
    #[must_use]
    pub fn user_id_token(&self) -> Option<&UserIdToken> {
        self.user_id_token.as_deref()
    }

    /// Message id attached while propagating, if any.
    #[must_use]
    pub fn message_id(&self) -> Option<u64> {
        self.message_id
    }

    /// Iterate over this failure and its transitive causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let mut next: Option<&(dyn StdError + 'static)> = Some(self);
        iter::from_fn(move || {
            let current = next?;
            next = current.source();
            Some(current)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_detail() {
        let err = MessagingError::new(ErrorCode::ParseFailed);
        assert_eq!(format!("{err}"), "message parse failed");
    }

    #[test]
    fn test_display_with_detail() {
        let err = MessagingError::new(ErrorCode::ParseFailed).with_detail("truncated header");
        assert_eq!(format!("{err}"), "message parse failed [truncated header]");
    }
}
