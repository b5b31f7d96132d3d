//! The domain failure taxonomy and the `Outcome` container.
//!
//! Every vendor error caught at the data-layer boundary is classified into
//! exactly one [`Failure`] variant and returned as `Err` inside an
//! [`Outcome`]. The set is closed: adding a variant breaks every exhaustive
//! `match` over it at compile time, which is the point.

use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::i18n::MessageKey;

pub mod classify;
pub mod sink;

/// Result of every data-layer operation, with the error type fixed to the
/// domain taxonomy. A success carrying no data is `Ok(())`.
pub type Outcome<T> = Result<T, Failure>;

/// Coarse failure category, used by the diagnostic sink and the
/// presentation policy. One category per [`Failure`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureCategory {
    Auth,
    Database,
    Network,
    VoiceInput,
    Validation,
    Unknown,
}

/// Classified domain failure.
///
/// `message_key` is mandatory on every variant and is the only part that
/// reaches the user (after resolution). `code`, `field`, and `cause` are
/// diagnostics for the sink and must never appear in a display string.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Failure {
    #[error("authentication failure (code {code:?})")]
    Auth {
        message_key: MessageKey,
        code: Option<String>,
    },
    #[error("database failure (code {code:?})")]
    Database {
        message_key: MessageKey,
        code: Option<String>,
    },
    #[error("network unavailable")]
    Network { message_key: MessageKey },
    #[error("voice input failure")]
    VoiceInput { message_key: MessageKey },
    #[error("validation failure (field {field:?})")]
    Validation {
        message_key: MessageKey,
        field: Option<String>,
    },
    #[error("unexpected failure: {cause}")]
    Unknown {
        message_key: MessageKey,
        cause: CapturedCause,
    },
}

impl Failure {
    pub fn auth(message_key: MessageKey, code: Option<String>) -> Self {
        Self::Auth { message_key, code }
    }

    pub fn database(message_key: MessageKey, code: Option<String>) -> Self {
        Self::Database { message_key, code }
    }

    /// Transport failures carry no vendor code; one fixed key covers them.
    pub fn network() -> Self {
        Self::Network {
            message_key: MessageKey::ErrorNetworkUnavailable,
        }
    }

    pub fn voice(message_key: MessageKey) -> Self {
        Self::VoiceInput { message_key }
    }

    pub fn validation(message_key: MessageKey, field: Option<String>) -> Self {
        Self::Validation { message_key, field }
    }

    pub fn unknown(cause: CapturedCause) -> Self {
        Self::Unknown {
            message_key: MessageKey::ErrorUnknown,
            cause,
        }
    }

    /// The localization key for this failure. Never absent.
    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::Auth { message_key, .. }
            | Self::Database { message_key, .. }
            | Self::Network { message_key }
            | Self::VoiceInput { message_key }
            | Self::Validation { message_key, .. }
            | Self::Unknown { message_key, .. } => *message_key,
        }
    }

    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Auth { .. } => FailureCategory::Auth,
            Self::Database { .. } => FailureCategory::Database,
            Self::Network { .. } => FailureCategory::Network,
            Self::VoiceInput { .. } => FailureCategory::VoiceInput,
            Self::Validation { .. } => FailureCategory::Validation,
            Self::Unknown { .. } => FailureCategory::Unknown,
        }
    }

    /// The raw vendor code, where the originating family had one.
    /// Diagnostic only.
    pub fn vendor_code(&self) -> Option<&str> {
        match self {
            Self::Auth { code, .. } | Self::Database { code, .. } => code.as_deref(),
            Self::Network { .. }
            | Self::VoiceInput { .. }
            | Self::Validation { .. }
            | Self::Unknown { .. } => None,
        }
    }

    /// Whether a caller may reasonably offer a retry affordance. The
    /// taxonomy encodes nothing beyond this hint; retry scheduling is the
    /// caller's concern.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Database { .. } => true,
            Self::Auth { .. }
            | Self::VoiceInput { .. }
            | Self::Validation { .. }
            | Self::Unknown { .. } => false,
        }
    }
}

/// A causal exception captured at classification time.
///
/// Serialization is lossy (display string only) so failures can cross the
/// IPC boundary; the live error and its `source()` chain stay available on
/// this side for the sink.
#[derive(Debug, Clone)]
pub enum CapturedCause {
    Live(Arc<dyn Error + Send + Sync>),
    Opaque(String),
}

impl CapturedCause {
    pub fn capture(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Live(Arc::new(err))
    }

    pub fn from_arc(err: Arc<dyn Error + Send + Sync>) -> Self {
        Self::Live(err)
    }
}

impl Display for CapturedCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live(err) => write!(f, "{err}"),
            Self::Opaque(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for CapturedCause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Live(err) => err.source(),
            Self::Opaque(_) => None,
        }
    }
}

// Display-string equality; good enough for assertions, and the only
// equality a lossy wrapper can honestly offer.
impl PartialEq for CapturedCause {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Serialize for CapturedCause {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Live(err) => serializer.collect_str(err),
            Self::Opaque(msg) => serializer.collect_str(msg),
        }
    }
}

impl<'de> Deserialize<'de> for CapturedCause {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::Opaque(s))
    }
}
