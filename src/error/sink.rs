//! Diagnostic sink capability for the classifiers.
//!
//! The sink is injected, never a process-wide singleton, so tests can
//! assert exact call counts. Recording must be infallible from the
//! classifier's point of view: `record` returns nothing and must not panic.

use serde::Serialize;
use tracing::{error, warn};

use crate::error::FailureCategory;

/// Severity of a classification diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticLevel {
    /// Unrecognized vendor code; the enumeration likely needs a new member.
    Warning,
    /// Exception of a family no classifier handles.
    Error,
}

/// Structured record emitted once per classification anomaly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub level: DiagnosticLevel,
    pub category: FailureCategory,
    pub vendor_code: Option<String>,
    pub detail: String,
}

/// Where classification diagnostics go. Fire-and-forget.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, record: DiagnosticRecord);
}

/// Production sink backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, record: DiagnosticRecord) {
        match record.level {
            DiagnosticLevel::Warning => warn!(
                category = ?record.category,
                vendor_code = record.vendor_code.as_deref().unwrap_or("none"),
                "{}", record.detail
            ),
            DiagnosticLevel::Error => error!(
                category = ?record.category,
                vendor_code = record.vendor_code.as_deref().unwrap_or("none"),
                "{}", record.detail
            ),
        }
    }
}
