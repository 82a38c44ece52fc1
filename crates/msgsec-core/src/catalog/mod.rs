//! Error classifier catalog for the messaging security layer.
//!
//! Every failure raised by the layer carries exactly one [`ErrorCode`]. A code
//! labels *why* an operation failed, independent of *where*; the failure value
//! in [`crate::failure`] records the where. Codes are grouped into stable
//! numeric ranges by subsystem so that logs and reports from mixed-version
//! peers remain comparable.
//!
//! The catalog here is the representative core set. Deployments with
//! additional authentication schemes or exchange mechanisms extend it, which
//! is why [`ErrorCode`] is `#[non_exhaustive]`.

use serde::{Deserialize, Serialize};

/// Remediation path a peer should take in response to a failure.
///
/// The numeric values are part of the protocol and must never change:
/// `Fail` = 1 through `SsoTokenRejected` = 10. A handler maps the code of a
/// fully enriched failure to one of these via [`ErrorCode::response_code`]
/// and acts on it (retry, re-key, re-authenticate, reject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    /// The message failed and cannot be recovered; abort the exchange.
    Fail,
    /// The failure is transient; the same message may be retried.
    TransientFailure,
    /// The entity must re-authenticate using its master token.
    EntityReauth,
    /// The user must re-authenticate using its user id token.
    UserReauth,
    /// New session keys must be negotiated before continuing.
    KeyxRequired,
    /// The entity must re-authenticate from its entity authentication data.
    EntitydataReauth,
    /// The user must re-authenticate from its user authentication data.
    UserdataReauth,
    /// A token has passed its expiration; renew it.
    Expired,
    /// The message was detected as a replay; resend with fresh state.
    Replayed,
    /// The single-sign-on token was rejected by the identity provider.
    SsoTokenRejected,
}

impl ResponseCode {
    /// Stable numeric value used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            ResponseCode::Fail => 1,
            ResponseCode::TransientFailure => 2,
            ResponseCode::EntityReauth => 3,
            ResponseCode::UserReauth => 4,
            ResponseCode::KeyxRequired => 5,
            ResponseCode::EntitydataReauth => 6,
            ResponseCode::UserdataReauth => 7,
            ResponseCode::Expired => 8,
            ResponseCode::Replayed => 9,
            ResponseCode::SsoTokenRejected => 10,
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> Self {
        code.code()
    }
}

/// Catalog entry for a single [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable numeric id, grouped by subsystem range.
    pub numeric_code: u16,
    /// Remediation path for this failure category.
    pub response_code: ResponseCode,
    /// Human-readable description of the failure.
    pub message: &'static str,
}

/// Classifier identifying a category of failure.
///
/// # Numeric Ranges
///
/// | Range | Subsystem             |
/// |-------|-----------------------|
/// | 1xxx  | Entity authentication |
/// | 2xxx  | User authentication   |
/// | 3xxx  | Tokens                |
/// | 4xxx  | Cryptography          |
/// | 5xxx  | Encoding              |
/// | 6xxx  | Key exchange          |
/// | 7xxx  | Messages              |
/// | 9xxx  | Internal              |
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // =========================================================================
    // Entity authentication (1xxx)
    // =========================================================================
    /// No entity authentication data was provided.
    EntityAuthDataMissing,
    /// The provided entity authentication data failed validation.
    EntityAuthDataInvalid,
    /// The entity authentication scheme is not supported by this peer.
    EntityAuthSchemeUnsupported,
    /// The entity identity is known and has been rejected.
    EntityIdentityRejected,

    // =========================================================================
    // User authentication (2xxx)
    // =========================================================================
    /// No user authentication data was provided.
    UserAuthDataMissing,
    /// The provided user authentication data failed validation.
    UserAuthDataInvalid,
    /// The user authentication scheme is not supported by this peer.
    UserAuthSchemeUnsupported,
    /// The single-sign-on token was rejected by the identity provider.
    SsoTokenRejected,

    // =========================================================================
    // Tokens (3xxx)
    // =========================================================================
    /// The master token has passed its expiration.
    MasterTokenExpired,
    /// The master token signature did not verify against a trusted key.
    MasterTokenUntrusted,
    /// The master token identity does not match the claimed entity.
    MasterTokenIdentityMismatch,
    /// The user id token has passed its expiration.
    UserIdTokenExpired,
    /// The user id token signature did not verify against a trusted key.
    UserIdTokenUntrusted,

    // =========================================================================
    // Cryptography (4xxx)
    // =========================================================================
    /// Signature verification failed.
    SignatureInvalid,
    /// Ciphertext failed its integrity check.
    CiphertextInvalid,
    /// Encryption of a payload failed.
    EncryptFailed,
    /// Decryption of a payload failed.
    DecryptFailed,
    /// Key derivation failed.
    KeyDerivationFailed,
    /// No session keys are available for the requested operation.
    SessionKeysUnavailable,

    // =========================================================================
    // Encoding (5xxx)
    // =========================================================================
    /// A message or token could not be parsed.
    ParseFailed,
    /// A message or token could not be encoded.
    EncodeFailed,
    /// The peer speaks an unsupported protocol version.
    UnsupportedVersion,

    // =========================================================================
    // Key exchange (6xxx)
    // =========================================================================
    /// The requested key exchange scheme is not supported by this peer.
    KeyExchangeSchemeUnsupported,
    /// The message carried no key request data where some was required.
    KeyRequestDataMissing,
    /// The key response data was rejected.
    KeyResponseRejected,

    // =========================================================================
    // Messages (7xxx)
    // =========================================================================
    /// The message was detected as a replay.
    MessageReplayed,
    /// The message id fell outside the interoperable range.
    MessageIdOutOfRange,

    // =========================================================================
    // Internal (9xxx)
    // =========================================================================
    /// Unexpected internal failure.
    InternalFailure,
    /// The service is temporarily unable to process the message.
    ServiceBusy,
}

impl ErrorCode {
    /// Every code in the catalog, for enumeration and exhaustiveness checks.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::EntityAuthDataMissing,
        ErrorCode::EntityAuthDataInvalid,
        ErrorCode::EntityAuthSchemeUnsupported,
        ErrorCode::EntityIdentityRejected,
        ErrorCode::UserAuthDataMissing,
        ErrorCode::UserAuthDataInvalid,
        ErrorCode::UserAuthSchemeUnsupported,
        ErrorCode::SsoTokenRejected,
        ErrorCode::MasterTokenExpired,
        ErrorCode::MasterTokenUntrusted,
        ErrorCode::MasterTokenIdentityMismatch,
        ErrorCode::UserIdTokenExpired,
        ErrorCode::UserIdTokenUntrusted,
        ErrorCode::SignatureInvalid,
        ErrorCode::CiphertextInvalid,
        ErrorCode::EncryptFailed,
        ErrorCode::DecryptFailed,
        ErrorCode::KeyDerivationFailed,
        ErrorCode::SessionKeysUnavailable,
        ErrorCode::ParseFailed,
        ErrorCode::EncodeFailed,
        ErrorCode::UnsupportedVersion,
        ErrorCode::KeyExchangeSchemeUnsupported,
        ErrorCode::KeyRequestDataMissing,
        ErrorCode::KeyResponseRejected,
        ErrorCode::MessageReplayed,
        ErrorCode::MessageIdOutOfRange,
        ErrorCode::InternalFailure,
        ErrorCode::ServiceBusy,
    ];

    /// The full catalog entry for this code.
    #[must_use]
    pub const fn entry(self) -> CatalogEntry {
        match self {
            ErrorCode::EntityAuthDataMissing => CatalogEntry {
                numeric_code: 1000,
                response_code: ResponseCode::EntitydataReauth,
                message: "entity authentication data missing",
            },
            ErrorCode::EntityAuthDataInvalid => CatalogEntry {
                numeric_code: 1001,
                response_code: ResponseCode::EntitydataReauth,
                message: "entity authentication data invalid",
            },
            ErrorCode::EntityAuthSchemeUnsupported => CatalogEntry {
                numeric_code: 1002,
                response_code: ResponseCode::Fail,
                message: "entity authentication scheme not supported",
            },
            ErrorCode::EntityIdentityRejected => CatalogEntry {
                numeric_code: 1003,
                response_code: ResponseCode::Fail,
                message: "entity identity rejected",
            },
            ErrorCode::UserAuthDataMissing => CatalogEntry {
                numeric_code: 2000,
                response_code: ResponseCode::UserdataReauth,
                message: "user authentication data missing",
            },
            ErrorCode::UserAuthDataInvalid => CatalogEntry {
                numeric_code: 2001,
                response_code: ResponseCode::UserdataReauth,
                message: "user authentication data invalid",
            },
            ErrorCode::UserAuthSchemeUnsupported => CatalogEntry {
                numeric_code: 2002,
                response_code: ResponseCode::Fail,
                message: "user authentication scheme not supported",
            },
            ErrorCode::SsoTokenRejected => CatalogEntry {
                numeric_code: 2003,
                response_code: ResponseCode::SsoTokenRejected,
                message: "single-sign-on token rejected",
            },
            ErrorCode::MasterTokenExpired => CatalogEntry {
                numeric_code: 3000,
                response_code: ResponseCode::Expired,
                message: "master token expired",
            },
            ErrorCode::MasterTokenUntrusted => CatalogEntry {
                numeric_code: 3001,
                response_code: ResponseCode::EntityReauth,
                message: "master token untrusted",
            },
            ErrorCode::MasterTokenIdentityMismatch => CatalogEntry {
                numeric_code: 3002,
                response_code: ResponseCode::EntityReauth,
                message: "master token identity mismatch",
            },
            ErrorCode::UserIdTokenExpired => CatalogEntry {
                numeric_code: 3100,
                response_code: ResponseCode::UserReauth,
                message: "user id token expired",
            },
            ErrorCode::UserIdTokenUntrusted => CatalogEntry {
                numeric_code: 3101,
                response_code: ResponseCode::UserReauth,
                message: "user id token untrusted",
            },
            ErrorCode::SignatureInvalid => CatalogEntry {
                numeric_code: 4000,
                response_code: ResponseCode::Fail,
                message: "signature verification failed",
            },
            ErrorCode::CiphertextInvalid => CatalogEntry {
                numeric_code: 4001,
                response_code: ResponseCode::Fail,
                message: "ciphertext failed integrity check",
            },
            ErrorCode::EncryptFailed => CatalogEntry {
                numeric_code: 4002,
                response_code: ResponseCode::Fail,
                message: "payload encryption failed",
            },
            ErrorCode::DecryptFailed => CatalogEntry {
                numeric_code: 4003,
                response_code: ResponseCode::Fail,
                message: "payload decryption failed",
            },
            ErrorCode::KeyDerivationFailed => CatalogEntry {
                numeric_code: 4004,
                response_code: ResponseCode::Fail,
                message: "key derivation failed",
            },
            ErrorCode::SessionKeysUnavailable => CatalogEntry {
                numeric_code: 4005,
                response_code: ResponseCode::KeyxRequired,
                message: "no session keys available",
            },
            ErrorCode::ParseFailed => CatalogEntry {
                numeric_code: 5000,
                response_code: ResponseCode::Fail,
                message: "message parse failed",
            },
            ErrorCode::EncodeFailed => CatalogEntry {
                numeric_code: 5001,
                response_code: ResponseCode::Fail,
                message: "message encode failed",
            },
            ErrorCode::UnsupportedVersion => CatalogEntry {
                numeric_code: 5002,
                response_code: ResponseCode::Fail,
                message: "unsupported protocol version",
            },
            ErrorCode::KeyExchangeSchemeUnsupported => CatalogEntry {
                numeric_code: 6000,
                response_code: ResponseCode::Fail,
                message: "key exchange scheme not supported",
            },
            ErrorCode::KeyRequestDataMissing => CatalogEntry {
                numeric_code: 6001,
                response_code: ResponseCode::KeyxRequired,
                message: "key request data missing",
            },
            ErrorCode::KeyResponseRejected => CatalogEntry {
                numeric_code: 6002,
                response_code: ResponseCode::KeyxRequired,
                message: "key response data rejected",
            },
            ErrorCode::MessageReplayed => CatalogEntry {
                numeric_code: 7000,
                response_code: ResponseCode::Replayed,
                message: "message replayed",
            },
            ErrorCode::MessageIdOutOfRange => CatalogEntry {
                numeric_code: 7001,
                response_code: ResponseCode::Fail,
                message: "message id out of range",
            },
            ErrorCode::InternalFailure => CatalogEntry {
                numeric_code: 9000,
                response_code: ResponseCode::Fail,
                message: "internal failure",
            },
            ErrorCode::ServiceBusy => CatalogEntry {
                numeric_code: 9001,
                response_code: ResponseCode::TransientFailure,
                message: "service temporarily unavailable",
            },
        }
    }

    /// Stable numeric id for this code.
    #[must_use]
    pub const fn numeric_code(self) -> u16 {
        self.entry().numeric_code
    }

    /// Remediation path a handler should take for this code.
    #[must_use]
    pub const fn response_code(self) -> ResponseCode {
        self.entry().response_code
    }

    /// Human-readable description of this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        self.entry().message
    }
}
