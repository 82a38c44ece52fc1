//! Tests for the error classifier catalog.

use std::collections::HashSet;

use msgsec_core::catalog::{ErrorCode, ResponseCode};

// =============================================================================
// Response Code Wire Values
// =============================================================================

#[test]
fn test_response_code_values_are_fixed() {
    // These values are protocol constants shared with deployed peers.
    assert_eq!(u8::from(ResponseCode::Fail), 1);
    assert_eq!(u8::from(ResponseCode::TransientFailure), 2);
    assert_eq!(u8::from(ResponseCode::EntityReauth), 3);
    assert_eq!(u8::from(ResponseCode::UserReauth), 4);
    assert_eq!(u8::from(ResponseCode::KeyxRequired), 5);
    assert_eq!(u8::from(ResponseCode::EntitydataReauth), 6);
    assert_eq!(u8::from(ResponseCode::UserdataReauth), 7);
    assert_eq!(u8::from(ResponseCode::Expired), 8);
    assert_eq!(u8::from(ResponseCode::Replayed), 9);
    assert_eq!(u8::from(ResponseCode::SsoTokenRejected), 10);
}

// =============================================================================
// Catalog Integrity
// =============================================================================

#[test]
fn test_numeric_codes_are_unique() {
    let mut seen = HashSet::new();
    for code in ErrorCode::ALL {
        assert!(
            seen.insert(code.numeric_code()),
            "duplicate numeric id {} for {code:?}",
            code.numeric_code()
        );
    }
}

#[test]
fn test_numeric_ranges_group_by_subsystem() {
    assert_eq!(ErrorCode::EntityAuthDataMissing.numeric_code() / 1000, 1);
    assert_eq!(ErrorCode::UserAuthDataMissing.numeric_code() / 1000, 2);
    assert_eq!(ErrorCode::MasterTokenExpired.numeric_code() / 1000, 3);
    assert_eq!(ErrorCode::SignatureInvalid.numeric_code() / 1000, 4);
    assert_eq!(ErrorCode::ParseFailed.numeric_code() / 1000, 5);
    assert_eq!(ErrorCode::KeyRequestDataMissing.numeric_code() / 1000, 6);
    assert_eq!(ErrorCode::MessageReplayed.numeric_code() / 1000, 7);
    assert_eq!(ErrorCode::InternalFailure.numeric_code() / 1000, 9);
}

#[test]
fn test_remediation_mapping_is_deterministic() {
    // Spot checks on the classifier -> remediation contract.
    assert_eq!(
        ErrorCode::MasterTokenExpired.response_code(),
        ResponseCode::Expired
    );
    assert_eq!(
        ErrorCode::MasterTokenUntrusted.response_code(),
        ResponseCode::EntityReauth
    );
    assert_eq!(
        ErrorCode::SessionKeysUnavailable.response_code(),
        ResponseCode::KeyxRequired
    );
    assert_eq!(
        ErrorCode::EntityAuthDataMissing.response_code(),
        ResponseCode::EntitydataReauth
    );
    assert_eq!(
        ErrorCode::MessageReplayed.response_code(),
        ResponseCode::Replayed
    );
    assert_eq!(
        ErrorCode::ServiceBusy.response_code(),
        ResponseCode::TransientFailure
    );
    assert_eq!(ErrorCode::SignatureInvalid.response_code(), ResponseCode::Fail);
}

#[test]
fn test_messages_describe_why_not_where() {
    assert_eq!(
        ErrorCode::SignatureInvalid.message(),
        "signature verification failed"
    );
    assert_eq!(
        ErrorCode::KeyDerivationFailed.message(),
        "key derivation failed"
    );
}

// =============================================================================
// Serialized Names
// =============================================================================

#[test]
fn test_codes_serialize_by_screaming_snake_name() {
    let json = serde_json::to_string(&ErrorCode::SignatureInvalid).unwrap();
    assert_eq!(json, "\"SIGNATURE_INVALID\"");

    let parsed: ErrorCode = serde_json::from_str("\"MASTER_TOKEN_EXPIRED\"").unwrap();
    assert_eq!(parsed, ErrorCode::MasterTokenExpired);
}

#[test]
fn test_response_codes_serialize_by_name() {
    let json = serde_json::to_string(&ResponseCode::KeyxRequired).unwrap();
    assert_eq!(json, "\"KEYX_REQUIRED\"");
}
