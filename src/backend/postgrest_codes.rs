//! Database-gateway error codes (the `PGRST`-prefixed family).

use crate::i18n::MessageKey;

/// The constant prefix every gateway code starts with.
pub const GATEWAY_PREFIX: &str = "PGRST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostgrestErrorCode {
    /// Requested a single row, zero (or more than one) matched.
    NoMatchingRow,          // PGRST116
    /// The caller's JWT is expired.
    JwtExpired,             // PGRST301
    /// Query names a column the exposed schema doesn't have.
    MissingColumn,          // PGRST204
    /// Query names a table the exposed schema doesn't have.
    MissingTable,           // PGRST205
    /// Malformed query string.
    QueryParseError,        // PGRST100
    /// Unsatisfiable range header.
    InvalidRange,           // PGRST103
    Unknown,
}

impl PostgrestErrorCode {
    pub const KNOWN: &'static [PostgrestErrorCode] = &[
        Self::NoMatchingRow,
        Self::JwtExpired,
        Self::MissingColumn,
        Self::MissingTable,
        Self::QueryParseError,
        Self::InvalidRange,
    ];

    /// Total. `None` and unrecognized codes map to `Unknown`; never panics.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("PGRST116") => Self::NoMatchingRow,
            Some("PGRST301") => Self::JwtExpired,
            Some("PGRST204") => Self::MissingColumn,
            Some("PGRST205") => Self::MissingTable,
            Some("PGRST100") => Self::QueryParseError,
            Some("PGRST103") => Self::InvalidRange,
            _ => Self::Unknown,
        }
    }

    pub fn message_key(self) -> MessageKey {
        match self {
            Self::NoMatchingRow => MessageKey::ErrorDatabaseNotFound,
            Self::JwtExpired => MessageKey::ErrorDatabaseSessionExpired,
            Self::MissingColumn | Self::MissingTable => MessageKey::ErrorDatabaseSchemaMismatch,
            Self::QueryParseError | Self::InvalidRange => MessageKey::ErrorDatabaseBadRequest,
            Self::Unknown => MessageKey::ErrorDatabaseUnknown,
        }
    }

    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::NoMatchingRow => Some("PGRST116"),
            Self::JwtExpired => Some("PGRST301"),
            Self::MissingColumn => Some("PGRST204"),
            Self::MissingTable => Some("PGRST205"),
            Self::QueryParseError => Some("PGRST100"),
            Self::InvalidRange => Some("PGRST103"),
            Self::Unknown => None,
        }
    }
}
