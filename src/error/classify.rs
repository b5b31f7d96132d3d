//! Vendor exception → [`Failure`] classifiers.
//!
//! Pure except for the injected diagnostic sink. None of these functions
//! can panic or return an error: an unrecognized code resolves to the
//! family's `Unknown` member (one warning-level diagnostic), an exception
//! no family handles resolves to `Failure::Unknown` (one error-level
//! diagnostic). Classification keys off the vendor code field only —
//! exception message text is never inspected.

use std::error::Error;

use crate::backend::auth_codes::AuthErrorCode;
use crate::backend::pg_codes::PostgresErrorCode;
use crate::backend::postgrest_codes::{GATEWAY_PREFIX, PostgrestErrorCode};
use crate::backend::storage_codes::StorageErrorCode;
use crate::backend::{AuthApiError, BackendError, PostgrestError, StorageApiError};
use crate::error::sink::{DiagnosticLevel, DiagnosticRecord, DiagnosticSink};
use crate::error::{CapturedCause, Failure, FailureCategory};
use crate::i18n::MessageKey;

/// Classify a caught backend error by its statically-known vendor family.
pub fn classify(err: &BackendError, sink: &dyn DiagnosticSink) -> Failure {
    match err {
        BackendError::Auth(e) => classify_auth(e, sink),
        BackendError::Database(e) => classify_database(e, sink),
        BackendError::Storage(e) => classify_storage(e, sink),
        BackendError::Network(cause) => classify_network(cause.as_ref()),
        BackendError::Other(cause) => {
            sink.record(DiagnosticRecord {
                level: DiagnosticLevel::Error,
                category: FailureCategory::Unknown,
                vendor_code: None,
                detail: format!("unclassifiable backend exception: {cause}"),
            });
            Failure::unknown(CapturedCause::from_arc(cause.clone()))
        }
    }
}

/// Identity-provider failures. Single code extraction, single parse.
pub fn classify_auth(err: &AuthApiError, sink: &dyn DiagnosticSink) -> Failure {
    let member = AuthErrorCode::parse(err.code.as_deref());
    if member == AuthErrorCode::Unknown {
        warn_unrecognized(sink, FailureCategory::Auth, err.code.as_deref());
    }
    Failure::auth(member.message_key(), err.code.clone())
}

/// Database failures, two-stage dispatch in fixed order: gateway prefix
/// first, then the exact five-digit engine pattern, then the generic
/// fallback. The order is load-bearing and must not change.
pub fn classify_database(err: &PostgrestError, sink: &dyn DiagnosticSink) -> Failure {
    let raw = err.code.as_deref();
    let key = match raw {
        Some(code) if code.starts_with(GATEWAY_PREFIX) => {
            let member = PostgrestErrorCode::parse(Some(code));
            if member == PostgrestErrorCode::Unknown {
                warn_unrecognized(sink, FailureCategory::Database, raw);
            }
            member.message_key()
        }
        Some(code) if is_five_digits(code) => {
            let member = PostgresErrorCode::parse(Some(code));
            if member == PostgresErrorCode::Unknown {
                warn_unrecognized(sink, FailureCategory::Database, raw);
            }
            member.message_key()
        }
        _ => {
            warn_unrecognized(sink, FailureCategory::Database, raw);
            MessageKey::ErrorDatabaseUnknown
        }
    };
    Failure::database(key, err.code.clone())
}

/// Blob-storage failures. Surfaced under the database category by design;
/// the storage message keys keep the distinction visible to the user.
pub fn classify_storage(err: &StorageApiError, sink: &dyn DiagnosticSink) -> Failure {
    let member = StorageErrorCode::parse(err.error_code.as_deref());
    if member == StorageErrorCode::Unknown {
        warn_unrecognized(sink, FailureCategory::Database, err.error_code.as_deref());
    }
    Failure::database(member.message_key(), err.error_code.clone())
}

/// Transport failures carry no structured vendor code, so there is nothing
/// to sub-classify: any connectivity exception, whatever its type or
/// message, becomes the one generic network failure.
pub fn classify_network(_cause: &(dyn Error + Send + Sync)) -> Failure {
    Failure::network()
}

fn is_five_digits(code: &str) -> bool {
    code.len() == 5 && code.bytes().all(|b| b.is_ascii_digit())
}

fn warn_unrecognized(sink: &dyn DiagnosticSink, category: FailureCategory, code: Option<&str>) {
    sink.record(DiagnosticRecord {
        level: DiagnosticLevel::Warning,
        category,
        vendor_code: code.map(str::to_owned),
        detail: "unrecognized vendor error code".to_owned(),
    });
}
