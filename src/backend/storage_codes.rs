//! Blob-storage error codes.
//!
//! Storage failures surface under the database category; the
//! storage-specific message keys keep the user-facing distinction.

use crate::i18n::MessageKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    NoSuchKey,
    NoSuchBucket,
    AccessDenied,
    InvalidJwt,
    EntityTooLarge,
    KeyAlreadyExists,
    Unknown,
}

impl StorageErrorCode {
    pub const KNOWN: &'static [StorageErrorCode] = &[
        Self::NoSuchKey,
        Self::NoSuchBucket,
        Self::AccessDenied,
        Self::InvalidJwt,
        Self::EntityTooLarge,
        Self::KeyAlreadyExists,
    ];

    /// Total. `None` and unrecognized identifiers map to `Unknown`; never
    /// panics.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("NoSuchKey") => Self::NoSuchKey,
            Some("NoSuchBucket") => Self::NoSuchBucket,
            Some("AccessDenied") => Self::AccessDenied,
            Some("InvalidJWT") => Self::InvalidJwt,
            Some("EntityTooLarge") => Self::EntityTooLarge,
            Some("KeyAlreadyExists") => Self::KeyAlreadyExists,
            _ => Self::Unknown,
        }
    }

    pub fn message_key(self) -> MessageKey {
        match self {
            Self::NoSuchKey | Self::NoSuchBucket => MessageKey::ErrorStorageNotFound,
            Self::AccessDenied => MessageKey::ErrorStorageAccessDenied,
            Self::InvalidJwt => MessageKey::ErrorDatabaseSessionExpired,
            Self::EntityTooLarge => MessageKey::ErrorStorageTooLarge,
            Self::KeyAlreadyExists => MessageKey::ErrorStorageConflict,
            Self::Unknown => MessageKey::ErrorStorageUnknown,
        }
    }

    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::NoSuchKey => Some("NoSuchKey"),
            Self::NoSuchBucket => Some("NoSuchBucket"),
            Self::AccessDenied => Some("AccessDenied"),
            Self::InvalidJwt => Some("InvalidJWT"),
            Self::EntityTooLarge => Some("EntityTooLarge"),
            Self::KeyAlreadyExists => Some("KeyAlreadyExists"),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_total() {
        assert_eq!(StorageErrorCode::parse(None), StorageErrorCode::Unknown);
        assert_eq!(
            StorageErrorCode::parse(Some("SomethingNew")),
            StorageErrorCode::Unknown
        );
    }
}
