//! Tests for the vendor-exception classifiers and the family dispatcher.

use std::io;

use crate::backend::{AuthApiError, BackendError, PostgrestError, StorageApiError};
use crate::error::classify::{
    classify, classify_auth, classify_database, classify_network, classify_storage,
};
use crate::error::sink::DiagnosticLevel;
use crate::error::{Failure, FailureCategory};
use crate::i18n::MessageKey;
use crate::tests::support::RecordingSink;

fn auth_error(code: Option<&str>) -> AuthApiError {
    AuthApiError {
        code: code.map(str::to_owned),
        status: Some(400),
        message: "upstream message, never inspected".to_owned(),
    }
}

fn db_error(code: Option<&str>) -> PostgrestError {
    PostgrestError {
        code: code.map(str::to_owned),
        message: "upstream message, never inspected".to_owned(),
        details: None,
        hint: None,
    }
}

fn storage_error(code: Option<&str>) -> StorageApiError {
    StorageApiError {
        error_code: code.map(str::to_owned),
        status: Some(400),
        message: "upstream message, never inspected".to_owned(),
    }
}

#[test]
fn gateway_no_matching_row_becomes_database_not_found() {
    let sink = RecordingSink::new();
    let failure = classify_database(&db_error(Some("PGRST116")), &sink);

    assert_eq!(failure.category(), FailureCategory::Database);
    assert_eq!(failure.message_key(), MessageKey::ErrorDatabaseNotFound);
    assert_eq!(failure.vendor_code(), Some("PGRST116"));
    assert_eq!(sink.count(), 0);
}

#[test]
fn engine_unique_violation_becomes_pg_unique_violation() {
    let sink = RecordingSink::new();
    let failure = classify_database(&db_error(Some("23505")), &sink);

    assert_eq!(failure.category(), FailureCategory::Database);
    assert_eq!(failure.message_key(), MessageKey::ErrorPgUniqueViolation);
    assert_eq!(failure.vendor_code(), Some("23505"));
    assert_eq!(sink.count(), 0);
}

#[test]
fn gateway_prefix_is_checked_before_engine_pattern() {
    // A PGRST-prefixed code must take the gateway arm even when
    // unrecognized there; it must not fall through to the engine parse.
    let sink = RecordingSink::new();
    let failure = classify_database(&db_error(Some("PGRST999")), &sink);

    assert_eq!(failure.message_key(), MessageKey::ErrorDatabaseUnknown);
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, DiagnosticLevel::Warning);
    assert_eq!(records[0].vendor_code.as_deref(), Some("PGRST999"));
}

#[test]
fn alphanumeric_sqlstate_takes_generic_fallback() {
    // 42P01 is a real SQLSTATE but not all-numeric, so it matches neither
    // pattern and lands on the generic unknown-database key.
    let sink = RecordingSink::new();
    let failure = classify_database(&db_error(Some("42P01")), &sink);

    assert_eq!(failure.message_key(), MessageKey::ErrorDatabaseUnknown);
    assert_eq!(failure.vendor_code(), Some("42P01"));
    assert_eq!(sink.count(), 1);
}

#[test]
fn absent_database_code_takes_generic_fallback() {
    let sink = RecordingSink::new();
    let failure = classify_database(&db_error(None), &sink);

    assert_eq!(failure.message_key(), MessageKey::ErrorDatabaseUnknown);
    assert_eq!(failure.vendor_code(), None);
    assert_eq!(sink.count(), 1);
}

#[test]
fn invalid_grant_and_invalid_credentials_resolve_identically() {
    let sink = RecordingSink::new();
    let grant = classify_auth(&auth_error(Some("invalid_grant")), &sink);
    let creds = classify_auth(&auth_error(Some("invalid_credentials")), &sink);

    assert_eq!(grant.message_key(), MessageKey::ErrorAuthInvalidCredentials);
    assert_eq!(grant.message_key(), creds.message_key());
    // The raw code is preserved per call, so the two stay distinguishable
    // in diagnostics.
    assert_eq!(grant.vendor_code(), Some("invalid_grant"));
    assert_eq!(creds.vendor_code(), Some("invalid_credentials"));
    assert_eq!(sink.count(), 0);
}

#[test]
fn unrecognized_auth_code_warns_once_and_keeps_the_code() {
    let sink = RecordingSink::new();
    let failure = classify_auth(&auth_error(Some("brand_new_code")), &sink);

    assert_eq!(failure.category(), FailureCategory::Auth);
    assert_eq!(failure.message_key(), MessageKey::ErrorAuthUnknown);
    assert_eq!(failure.vendor_code(), Some("brand_new_code"));
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, DiagnosticLevel::Warning);
    assert_eq!(records[0].category, FailureCategory::Auth);
}

#[test]
fn storage_failures_surface_under_the_database_category() {
    let sink = RecordingSink::new();
    let failure = classify_storage(&storage_error(Some("NoSuchKey")), &sink);

    assert_eq!(failure.category(), FailureCategory::Database);
    assert_eq!(failure.message_key(), MessageKey::ErrorStorageNotFound);
    assert_eq!(failure.vendor_code(), Some("NoSuchKey"));
    assert_eq!(sink.count(), 0);
}

#[test]
fn any_transport_error_becomes_the_one_network_failure() {
    // The message deliberately contains vendor-code-shaped text; it must
    // not influence classification.
    let cause = io::Error::new(
        io::ErrorKind::ConnectionReset,
        "connection reset (23505, PGRST116, invalid_grant)",
    );
    let failure = classify_network(&cause);

    assert_eq!(failure, Failure::network());
    assert_eq!(failure.message_key(), MessageKey::ErrorNetworkUnavailable);
    assert_eq!(failure.vendor_code(), None);
}

#[test]
fn dispatcher_routes_each_family() {
    let sink = RecordingSink::new();

    let auth = classify(&BackendError::from(auth_error(Some("weak_password"))), &sink);
    assert_eq!(auth.category(), FailureCategory::Auth);

    let db = classify(&BackendError::from(db_error(Some("23503"))), &sink);
    assert_eq!(db.message_key(), MessageKey::ErrorPgForeignKeyViolation);

    let storage = classify(&BackendError::from(storage_error(Some("AccessDenied"))), &sink);
    assert_eq!(storage.message_key(), MessageKey::ErrorStorageAccessDenied);

    let network = classify(
        &BackendError::network(io::Error::new(io::ErrorKind::TimedOut, "timed out")),
        &sink,
    );
    assert_eq!(network.category(), FailureCategory::Network);

    assert_eq!(sink.count(), 0);
}

#[test]
fn unrecognized_exception_becomes_unknown_with_exactly_one_diagnostic() {
    let sink = RecordingSink::new();
    let err = BackendError::other(io::Error::other("speech engine fell over"));
    let failure = classify(&err, &sink);

    assert_eq!(failure.category(), FailureCategory::Unknown);
    assert_eq!(failure.message_key(), MessageKey::ErrorUnknown);
    match &failure {
        Failure::Unknown { cause, .. } => {
            assert_eq!(cause.to_string(), "speech engine fell over");
        }
        other => panic!("expected Failure::Unknown, got {other:?}"),
    }

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, DiagnosticLevel::Error);
    assert_eq!(records[0].category, FailureCategory::Unknown);
}

#[test]
fn no_classifier_panics_on_degenerate_inputs() {
    let sink = RecordingSink::new();
    for code in [None, Some(""), Some(" "), Some("PGRST"), Some("\u{0}")] {
        let _ = classify_auth(&auth_error(code), &sink);
        let _ = classify_database(&db_error(code), &sink);
        let _ = classify_storage(&storage_error(code), &sink);
    }
}
