//! Tests for the versioned failure report.

use std::io;
use std::sync::Arc;

use msgsec_core::auth::EntityAuthenticationData;
use msgsec_core::catalog::ErrorCode;
use msgsec_core::failure::MessagingError;
use msgsec_core::report::{FailureReport, REPORT_VERSION};
use msgsec_core::tokens::MasterToken;
use serde_json::Value;

// =============================================================================
// Capture Tests
// =============================================================================

#[test]
fn test_capture_minimal_failure() {
    let err = MessagingError::new(ErrorCode::ParseFailed);
    let report = FailureReport::capture(&err);

    assert_eq!(report.version, REPORT_VERSION);
    assert_eq!(report.code, ErrorCode::ParseFailed);
    assert_eq!(report.numeric_code, 5000);
    assert!(report.detail.is_none());
    assert_eq!(report.cause_chain, vec!["message parse failed".to_owned()]);
    assert!(report.entity_auth_data.is_none());
    assert!(report.master_token.is_none());
}

#[test]
fn test_capture_renders_cause_chain_outermost_first() {
    let primitive = io::Error::other("tag mismatch");
    let err = MessagingError::crypto(ErrorCode::CiphertextInvalid)
        .with_detail("chunk 2")
        .with_cause(primitive);

    let report: FailureReport = (&err).into();
    assert_eq!(
        report.cause_chain,
        vec![
            "ciphertext failed integrity check [chunk 2]".to_owned(),
            "tag mismatch".to_owned(),
        ]
    );
}

#[test]
fn test_capture_embeds_attached_context() {
    let data = Arc::new(EntityAuthenticationData::new("psk", "entity-2"));
    let token = Arc::new(MasterToken::new(5, 2, "entity-2"));
    let err = MessagingError::crypto(ErrorCode::SignatureInvalid)
        .with_entity_auth_data(Arc::clone(&data))
        .with_master_token(Arc::clone(&token))
        .with_message_id(88);

    let report = FailureReport::capture(&err);
    assert_eq!(report.entity_auth_data.as_ref(), Some(&*data));
    assert_eq!(report.master_token.as_ref(), Some(&*token));
    assert_eq!(report.message_id, Some(88));
}

// =============================================================================
// JSON Shape Tests
// =============================================================================

#[test]
fn test_json_shape() {
    let err = MessagingError::crypto(ErrorCode::SignatureInvalid)
        .with_detail("bad signature on token")
        .with_master_token(Arc::new(MasterToken::new(5, 2, "entity-2")));

    let value = serde_json::to_value(FailureReport::capture(&err)).unwrap();

    assert_eq!(value["version"], Value::from(1));
    assert_eq!(value["code"], Value::from("SIGNATURE_INVALID"));
    assert_eq!(value["numeric_code"], Value::from(4000));
    assert_eq!(value["response_code"], Value::from("FAIL"));
    assert_eq!(value["category"], Value::from("CRYPTO"));
    assert_eq!(value["detail"], Value::from("bad signature on token"));
    // The master token serializes in its own format.
    assert_eq!(value["master_token"]["serial_number"], Value::from(5));
    assert_eq!(value["master_token"]["identity"], Value::from("entity-2"));
}

#[test]
fn test_absent_context_is_omitted_from_json() {
    let err = MessagingError::new(ErrorCode::ParseFailed);
    let value = serde_json::to_value(FailureReport::capture(&err)).unwrap();

    let object = value.as_object().unwrap();
    assert!(!object.contains_key("detail"));
    assert!(!object.contains_key("entity_auth_data"));
    assert!(!object.contains_key("master_token"));
    assert!(!object.contains_key("user_id_token"));
    assert!(!object.contains_key("message_id"));
}

#[test]
fn test_report_round_trips_through_json() {
    let err = MessagingError::crypto(ErrorCode::SessionKeysUnavailable)
        .with_detail("rekey window closed")
        .with_cause(io::Error::other("keystore offline"))
        .with_master_token(Arc::new(MasterToken::new(7, 4, "entity-9")))
        .with_message_id(12);

    let report = FailureReport::capture(&err);
    let json = serde_json::to_string(&report).unwrap();
    let parsed: FailureReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, report);
}
