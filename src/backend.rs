//! Error surfaces of the hosted backend, as seen by the data layer.
//!
//! Each vendor family carries a machine-readable code field; that code is
//! the sole classification key. The human-readable `message` fields exist
//! because the REST bodies carry them, but classification never reads them.

use std::error::Error;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

pub mod auth_codes;
pub mod pg_codes;
pub mod postgrest_codes;
pub mod storage_codes;

/// Error body returned by the identity provider.
#[derive(Debug, Clone, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("auth request failed (code {code:?}, status {status:?})")]
pub struct AuthApiError {
    /// Stable machine-readable code, e.g. `invalid_credentials`.
    pub code: Option<String>,
    pub status: Option<u16>,
    pub message: String,
}

/// Error body returned by the database gateway. `code` is either a
/// gateway code (`PGRST...`) or a relational-engine SQLSTATE passed
/// through verbatim.
#[derive(Debug, Clone, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("database request failed (code {code:?})")]
pub struct PostgrestError {
    pub code: Option<String>,
    pub message: String,
    pub details: Option<String>,
    pub hint: Option<String>,
}

/// Error body returned by the blob storage service.
#[derive(Debug, Clone, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("storage request failed (code {error_code:?}, status {status:?})")]
pub struct StorageApiError {
    pub error_code: Option<String>,
    pub status: Option<u16>,
    pub message: String,
}

/// Everything a backend call can fail with, grouped by vendor family.
///
/// The repository constructs the variant matching the call it made, so the
/// classifier dispatches on a statically-known family rather than probing
/// runtime types.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("auth: {0}")]
    Auth(#[from] AuthApiError),
    #[error("database: {0}")]
    Database(#[from] PostgrestError),
    #[error("storage: {0}")]
    Storage(#[from] StorageApiError),
    #[error("network: {0}")]
    Network(Arc<dyn Error + Send + Sync>),
    #[error("unexpected: {0}")]
    Other(Arc<dyn Error + Send + Sync>),
}

impl BackendError {
    pub fn network(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    pub fn other(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }
}
