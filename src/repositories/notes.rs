//! Notes repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::backend::BackendError;
use crate::entities::notes::{Note, NoteChanges, NoteDraft};
use crate::error::classify::classify;
use crate::error::sink::DiagnosticSink;
use crate::error::{Failure, Outcome};
use crate::i18n::MessageKey;

/// Longest title the backend schema accepts.
const MAX_TITLE_LEN: usize = 200;

/// Client seam for the backend's notes endpoints. The implementor owns
/// transport, retries, and cancellation; this crate only sees the outcome.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn fetch(&self, id: Uuid) -> Result<Note, BackendError>;
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Note>, BackendError>;
    async fn insert(&self, draft: &NoteDraft) -> Result<Note, BackendError>;
    async fn patch(&self, id: Uuid, changes: &NoteChanges) -> Result<Note, BackendError>;
    async fn remove(&self, id: Uuid) -> Result<(), BackendError>;
}

/// Notes repository over an injected client seam and diagnostic sink.
pub struct NotesRepository<C> {
    client: C,
    sink: Arc<dyn DiagnosticSink>,
}

impl<C: NotesApi> NotesRepository<C> {
    pub fn new(client: C, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { client, sink }
    }

    /// The backing client seam.
    pub fn client(&self) -> &C {
        &self.client
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Outcome<Note> {
        debug!("Fetching note {id}");
        self.client
            .fetch(id)
            .await
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }

    #[instrument(skip(self))]
    pub async fn list(&self, owner_id: Uuid) -> Outcome<Vec<Note>> {
        debug!("Listing notes for owner {owner_id}");
        self.client
            .list(owner_id)
            .await
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }

    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: &NoteDraft) -> Outcome<Note> {
        if let Some(failure) = validate_draft(draft) {
            return Err(failure);
        }
        debug!("Creating note");
        self.client
            .insert(draft)
            .await
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }

    /// An empty patch is a no-op success: no backend call is made.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: Uuid, changes: &NoteChanges) -> Outcome<Option<Note>> {
        if changes.is_empty() {
            debug!("Empty patch for note {id}, skipping backend call");
            return Ok(None);
        }
        if let Some(failure) = validate_changes(changes) {
            return Err(failure);
        }
        debug!("Updating note {id}");
        self.client
            .patch(id, changes)
            .await
            .map(Some)
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Outcome<()> {
        debug!("Deleting note {id}");
        self.client
            .remove(id)
            .await
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }
}

fn validate_draft(draft: &NoteDraft) -> Option<Failure> {
    validate_title(&draft.title)
}

fn validate_changes(changes: &NoteChanges) -> Option<Failure> {
    changes.title.as_deref().and_then(validate_title)
}

fn validate_title(title: &str) -> Option<Failure> {
    if title.trim().is_empty() {
        Some(Failure::validation(
            MessageKey::ErrorValidationEmptyTitle,
            Some("title".to_owned()),
        ))
    } else if title.chars().count() > MAX_TITLE_LEN {
        Some(Failure::validation(
            MessageKey::ErrorValidationTitleTooLong,
            Some("title".to_owned()),
        ))
    } else {
        None
    }
}
