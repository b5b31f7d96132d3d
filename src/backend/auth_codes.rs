//! Identity-provider error codes.

use crate::i18n::MessageKey;

/// Known error codes of the identity provider, plus the mandatory
/// `Unknown` sentinel.
///
/// `invalid_grant` and `invalid_credentials` intentionally alias to one
/// member: the provider raises both for a failed credential check and the
/// product treats them as one condition. The raw code survives in the
/// failure diagnostic, so the two can be told apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorCode {
    InvalidCredentials,
    EmailNotConfirmed,
    UserAlreadyExists,
    WeakPassword,
    OverRequestRateLimit,
    RefreshTokenNotFound,
    Unknown,
}

impl AuthErrorCode {
    /// Members with a canonical raw code, for the generative tests.
    pub const KNOWN: &'static [AuthErrorCode] = &[
        Self::InvalidCredentials,
        Self::EmailNotConfirmed,
        Self::UserAlreadyExists,
        Self::WeakPassword,
        Self::OverRequestRateLimit,
        Self::RefreshTokenNotFound,
    ];

    /// Total. `None` and unrecognized codes map to `Unknown`; never panics.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("invalid_credentials") | Some("invalid_grant") => Self::InvalidCredentials,
            Some("email_not_confirmed") => Self::EmailNotConfirmed,
            Some("user_already_exists") | Some("email_exists") => Self::UserAlreadyExists,
            Some("weak_password") => Self::WeakPassword,
            Some("over_request_rate_limit") => Self::OverRequestRateLimit,
            Some("refresh_token_not_found") => Self::RefreshTokenNotFound,
            _ => Self::Unknown,
        }
    }

    pub fn message_key(self) -> MessageKey {
        match self {
            Self::InvalidCredentials => MessageKey::ErrorAuthInvalidCredentials,
            Self::EmailNotConfirmed => MessageKey::ErrorAuthEmailNotConfirmed,
            Self::UserAlreadyExists => MessageKey::ErrorAuthUserAlreadyExists,
            Self::WeakPassword => MessageKey::ErrorAuthWeakPassword,
            Self::OverRequestRateLimit => MessageKey::ErrorAuthRateLimited,
            Self::RefreshTokenNotFound => MessageKey::ErrorAuthSessionExpired,
            Self::Unknown => MessageKey::ErrorAuthUnknown,
        }
    }

    /// Canonical raw code; `None` for the sentinel.
    pub fn code(self) -> Option<&'static str> {
        match self {
            Self::InvalidCredentials => Some("invalid_credentials"),
            Self::EmailNotConfirmed => Some("email_not_confirmed"),
            Self::UserAlreadyExists => Some("user_already_exists"),
            Self::WeakPassword => Some("weak_password"),
            Self::OverRequestRateLimit => Some("over_request_rate_limit"),
            Self::RefreshTokenNotFound => Some("refresh_token_not_found"),
            Self::Unknown => None,
        }
    }
}
