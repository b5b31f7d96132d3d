//! Display affordances per failure category.
//!
//! Both the transient banner and the blocking dialog consult the same
//! lookup, so a given category always presents the same way.

use std::time::Duration;

use serde::Serialize;

use crate::error::FailureCategory;
use crate::i18n::MessageKey;

/// How a failure of some category is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDisplay {
    /// Banner / accent color, `0xRRGGBB`.
    pub color: u32,
    /// How long a transient surface stays up before dismissing itself.
    pub auto_dismiss: Duration,
    /// Icon identifier in the shell's icon set.
    pub icon: &'static str,
    /// Title key, resolved through the same locale tables as messages.
    pub title: MessageKey,
}

/// Total and deterministic: one bundle per category, nothing else.
pub fn display_for(category: FailureCategory) -> FailureDisplay {
    match category {
        FailureCategory::Auth => FailureDisplay {
            color: 0xC62828,
            auto_dismiss: Duration::from_secs(6),
            icon: "lock",
            title: MessageKey::ErrorTitleAuth,
        },
        FailureCategory::Database => FailureDisplay {
            color: 0xC62828,
            auto_dismiss: Duration::from_secs(6),
            icon: "cloud_off",
            title: MessageKey::ErrorTitleDatabase,
        },
        FailureCategory::Network => FailureDisplay {
            color: 0xEF6C00,
            auto_dismiss: Duration::from_secs(4),
            icon: "wifi_off",
            title: MessageKey::ErrorTitleNetwork,
        },
        FailureCategory::VoiceInput => FailureDisplay {
            color: 0x6A1B9A,
            auto_dismiss: Duration::from_secs(4),
            icon: "mic_off",
            title: MessageKey::ErrorTitleVoice,
        },
        FailureCategory::Validation => FailureDisplay {
            color: 0xF9A825,
            auto_dismiss: Duration::from_secs(4),
            icon: "error_outline",
            title: MessageKey::ErrorTitleValidation,
        },
        FailureCategory::Unknown => FailureDisplay {
            color: 0x455A64,
            auto_dismiss: Duration::from_secs(8),
            icon: "help_outline",
            title: MessageKey::ErrorTitleUnknown,
        },
    }
}
