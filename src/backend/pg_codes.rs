//! Relational-engine SQLSTATE codes surfaced through the gateway.
//!
//! Only the states a mobile client can actually provoke are enumerated;
//! everything else is `Unknown`. SQLSTATEs are five characters, and the
//! subset here is all-numeric; alphanumeric states (e.g. `42P01`) are
//! deliberately not matched and fall through the database classifier's
//! generic arm.

use crate::i18n::MessageKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostgresErrorCode {
    UniqueViolation,        // 23505
    ForeignKeyViolation,    // 23503
    NotNullViolation,       // 23502
    CheckViolation,         // 23514
    InsufficientPrivilege,  // 42501
    SerializationFailure,   // 40001
    QueryCanceled,          // 57014
    Unknown,
}

impl PostgresErrorCode {
    pub const KNOWN: &'static [PostgresErrorCode] = &[
        Self::UniqueViolation,
        Self::ForeignKeyViolation,
        Self::NotNullViolation,
        Self::CheckViolation,
        Self::InsufficientPrivilege,
        Self::SerializationFailure,
        Self::QueryCanceled,
    ];

    /// Total. `None` and unrecognized states map to `Unknown`; never panics.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("23505") => Self::UniqueViolation,
            Some("23503") => Self::ForeignKeyViolation,
            Some("23502") => Self::NotNullViolation,
            Some("23514") => Self::CheckViolation,
            Some("42501") => Self::InsufficientPrivilege,
            Some("40001") => Self::SerializationFailure,
            Some("57014") => Self::QueryCanceled,
            _ => Self::Unknown,
        }
    }

    pub fn message_key(self) -> MessageKey {
        match self {
            Self::UniqueViolation => MessageKey::ErrorPgUniqueViolation,
            Self::ForeignKeyViolation => MessageKey::ErrorPgForeignKeyViolation,
            Self::NotNullViolation => MessageKey::ErrorPgNotNullViolation,
            Self::CheckViolation => MessageKey::ErrorPgCheckViolation,
            Self::InsufficientPrivilege => MessageKey::ErrorPgInsufficientPrivilege,
            Self::SerializationFailure => MessageKey::ErrorPgSerializationFailure,
            Self::QueryCanceled => MessageKey::ErrorPgQueryCanceled,
            Self::Unknown => MessageKey::ErrorDatabaseUnknown,
        }
    }

    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::UniqueViolation => Some("23505"),
            Self::ForeignKeyViolation => Some("23503"),
            Self::NotNullViolation => Some("23502"),
            Self::CheckViolation => Some("23514"),
            Self::InsufficientPrivilege => Some("42501"),
            Self::SerializationFailure => Some("40001"),
            Self::QueryCanceled => Some("57014"),
            Self::Unknown => None,
        }
    }
}
