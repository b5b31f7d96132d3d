//! Shared test doubles.

use std::sync::Mutex;

use crate::error::sink::{DiagnosticRecord, DiagnosticSink};

/// Captures every diagnostic for exact call-count and content assertions.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, record: DiagnosticRecord) {
        self.records.lock().unwrap().push(record);
    }
}
