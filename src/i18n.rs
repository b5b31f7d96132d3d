//! Message keys, locale tables, and the key → display-string resolver.
//!
//! Every user-visible error string flows through here: classifiers attach a
//! [`MessageKey`] to each failure, and the UI shell resolves that key against
//! the table for the active locale. Raw vendor codes never reach a table.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub mod catalog;

/// Closed set of localization keys producible by this crate.
///
/// Keys serialize as their camelCase string form, which is also the key used
/// in the UI shell's localization assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    // Identity provider
    ErrorAuthInvalidCredentials,
    ErrorAuthEmailNotConfirmed,
    ErrorAuthUserAlreadyExists,
    ErrorAuthWeakPassword,
    ErrorAuthRateLimited,
    ErrorAuthSessionExpired,
    ErrorAuthUnknown,
    // Relational engine
    ErrorPgUniqueViolation,
    ErrorPgForeignKeyViolation,
    ErrorPgNotNullViolation,
    ErrorPgCheckViolation,
    ErrorPgInsufficientPrivilege,
    ErrorPgSerializationFailure,
    ErrorPgQueryCanceled,
    // Database gateway
    ErrorDatabaseNotFound,
    ErrorDatabaseSessionExpired,
    ErrorDatabaseSchemaMismatch,
    ErrorDatabaseBadRequest,
    ErrorDatabaseUnknown,
    // Blob storage
    ErrorStorageNotFound,
    ErrorStorageAccessDenied,
    ErrorStorageTooLarge,
    ErrorStorageConflict,
    ErrorStorageUnknown,
    // Transport, speech capture, local validation
    ErrorNetworkUnavailable,
    ErrorVoiceUnavailable,
    ErrorValidationEmptyTitle,
    ErrorValidationTitleTooLong,
    ErrorUnknown,
    // Dialog / banner titles, one per failure category
    ErrorTitleAuth,
    ErrorTitleDatabase,
    ErrorTitleNetwork,
    ErrorTitleVoice,
    ErrorTitleValidation,
    ErrorTitleUnknown,
}

impl MessageKey {
    /// Every key, for the locale-completeness test.
    pub const ALL: &'static [MessageKey] = &[
        Self::ErrorAuthInvalidCredentials,
        Self::ErrorAuthEmailNotConfirmed,
        Self::ErrorAuthUserAlreadyExists,
        Self::ErrorAuthWeakPassword,
        Self::ErrorAuthRateLimited,
        Self::ErrorAuthSessionExpired,
        Self::ErrorAuthUnknown,
        Self::ErrorPgUniqueViolation,
        Self::ErrorPgForeignKeyViolation,
        Self::ErrorPgNotNullViolation,
        Self::ErrorPgCheckViolation,
        Self::ErrorPgInsufficientPrivilege,
        Self::ErrorPgSerializationFailure,
        Self::ErrorPgQueryCanceled,
        Self::ErrorDatabaseNotFound,
        Self::ErrorDatabaseSessionExpired,
        Self::ErrorDatabaseSchemaMismatch,
        Self::ErrorDatabaseBadRequest,
        Self::ErrorDatabaseUnknown,
        Self::ErrorStorageNotFound,
        Self::ErrorStorageAccessDenied,
        Self::ErrorStorageTooLarge,
        Self::ErrorStorageConflict,
        Self::ErrorStorageUnknown,
        Self::ErrorNetworkUnavailable,
        Self::ErrorVoiceUnavailable,
        Self::ErrorValidationEmptyTitle,
        Self::ErrorValidationTitleTooLong,
        Self::ErrorUnknown,
        Self::ErrorTitleAuth,
        Self::ErrorTitleDatabase,
        Self::ErrorTitleNetwork,
        Self::ErrorTitleVoice,
        Self::ErrorTitleValidation,
        Self::ErrorTitleUnknown,
    ];

    /// The camelCase identifier this key carries in localization assets.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ErrorAuthInvalidCredentials => "errorAuthInvalidCredentials",
            Self::ErrorAuthEmailNotConfirmed => "errorAuthEmailNotConfirmed",
            Self::ErrorAuthUserAlreadyExists => "errorAuthUserAlreadyExists",
            Self::ErrorAuthWeakPassword => "errorAuthWeakPassword",
            Self::ErrorAuthRateLimited => "errorAuthRateLimited",
            Self::ErrorAuthSessionExpired => "errorAuthSessionExpired",
            Self::ErrorAuthUnknown => "errorAuthUnknown",
            Self::ErrorPgUniqueViolation => "errorPgUniqueViolation",
            Self::ErrorPgForeignKeyViolation => "errorPgForeignKeyViolation",
            Self::ErrorPgNotNullViolation => "errorPgNotNullViolation",
            Self::ErrorPgCheckViolation => "errorPgCheckViolation",
            Self::ErrorPgInsufficientPrivilege => "errorPgInsufficientPrivilege",
            Self::ErrorPgSerializationFailure => "errorPgSerializationFailure",
            Self::ErrorPgQueryCanceled => "errorPgQueryCanceled",
            Self::ErrorDatabaseNotFound => "errorDatabaseNotFound",
            Self::ErrorDatabaseSessionExpired => "errorDatabaseSessionExpired",
            Self::ErrorDatabaseSchemaMismatch => "errorDatabaseSchemaMismatch",
            Self::ErrorDatabaseBadRequest => "errorDatabaseBadRequest",
            Self::ErrorDatabaseUnknown => "errorDatabaseUnknown",
            Self::ErrorStorageNotFound => "errorStorageNotFound",
            Self::ErrorStorageAccessDenied => "errorStorageAccessDenied",
            Self::ErrorStorageTooLarge => "errorStorageTooLarge",
            Self::ErrorStorageConflict => "errorStorageConflict",
            Self::ErrorStorageUnknown => "errorStorageUnknown",
            Self::ErrorNetworkUnavailable => "errorNetworkUnavailable",
            Self::ErrorVoiceUnavailable => "errorVoiceUnavailable",
            Self::ErrorValidationEmptyTitle => "errorValidationEmptyTitle",
            Self::ErrorValidationTitleTooLong => "errorValidationTitleTooLong",
            Self::ErrorUnknown => "errorUnknown",
            Self::ErrorTitleAuth => "errorTitleAuth",
            Self::ErrorTitleDatabase => "errorTitleDatabase",
            Self::ErrorTitleNetwork => "errorTitleNetwork",
            Self::ErrorTitleVoice => "errorTitleVoice",
            Self::ErrorTitleValidation => "errorTitleValidation",
            Self::ErrorTitleUnknown => "errorTitleUnknown",
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported display locales. Selection is the caller's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
    Es,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Self::En, Self::De, Self::Es];

    /// The message table for this locale, built once per process.
    pub fn table(self) -> &'static LocaleTable {
        match self {
            Self::En => {
                static TABLE: OnceLock<LocaleTable> = OnceLock::new();
                TABLE.get_or_init(catalog::english)
            }
            Self::De => {
                static TABLE: OnceLock<LocaleTable> = OnceLock::new();
                TABLE.get_or_init(catalog::german)
            }
            Self::Es => {
                static TABLE: OnceLock<LocaleTable> = OnceLock::new();
                TABLE.get_or_init(catalog::spanish)
            }
        }
    }
}

/// Final fallback when a table lacks even its own unknown-error entry, so
/// resolution stays total no matter how a table was constructed.
const LAST_RESORT: &str = "Something went wrong. Please try again.";

/// Message key → localized template string for one locale.
pub struct LocaleTable {
    entries: HashMap<MessageKey, &'static str>,
    unknown: &'static str,
}

impl LocaleTable {
    pub fn from_entries(entries: &[(MessageKey, &'static str)]) -> Self {
        let entries: HashMap<_, _> = entries.iter().copied().collect();
        let unknown = entries
            .get(&MessageKey::ErrorUnknown)
            .copied()
            .unwrap_or(LAST_RESORT);
        Self { entries, unknown }
    }

    /// Resolve a key to its display string.
    ///
    /// Total: an absent key yields this locale's canonical unknown-error
    /// string, never the raw key and never a panic.
    pub fn resolve(&self, key: MessageKey) -> &'static str {
        self.entries.get(&key).copied().unwrap_or(self.unknown)
    }

    /// Exact lookup, used by the completeness test.
    pub fn get(&self, key: MessageKey) -> Option<&'static str> {
        self.entries.get(&key).copied()
    }
}
