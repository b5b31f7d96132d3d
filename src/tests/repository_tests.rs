//! Tests for the repository boundary: classify-at-the-catch-site, the
//! empty-patch no-op, and draft validation.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::{AuthApiError, BackendError, PostgrestError};
use crate::entities::account::{Credentials, Session};
use crate::entities::notes::{Note, NoteChanges, NoteDraft};
use crate::error::{Failure, FailureCategory};
use crate::i18n::MessageKey;
use crate::repositories::{AccountApi, AccountRepository, NotesApi, NotesRepository};
use crate::tests::support::RecordingSink;

fn sample_note(id: Uuid) -> Note {
    let now = Utc::now();
    Note {
        id,
        title: "Groceries".to_owned(),
        body: "milk, eggs".to_owned(),
        audio_path: None,
        pinned: false,
        created_at: now,
        updated_at: now,
        owner_id: Uuid::new_v4(),
    }
}

/// Stub client: counts calls, fails with the configured error if set.
#[derive(Default)]
struct StubNotes {
    calls: AtomicUsize,
    error: Option<BackendError>,
}

impl StubNotes {
    fn failing(error: BackendError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            error: Some(error),
        }
    }

    fn outcome_or(&self, id: Uuid) -> Result<Note, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(sample_note(id)),
        }
    }
}

#[async_trait]
impl NotesApi for StubNotes {
    async fn fetch(&self, id: Uuid) -> Result<Note, BackendError> {
        self.outcome_or(id)
    }

    async fn list(&self, _owner_id: Uuid) -> Result<Vec<Note>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(vec![sample_note(Uuid::new_v4())]),
        }
    }

    async fn insert(&self, _draft: &NoteDraft) -> Result<Note, BackendError> {
        self.outcome_or(Uuid::new_v4())
    }

    async fn patch(&self, id: Uuid, _changes: &NoteChanges) -> Result<Note, BackendError> {
        self.outcome_or(id)
    }

    async fn remove(&self, _id: Uuid) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

struct StubAccount {
    error: Option<BackendError>,
}

#[async_trait]
impl AccountApi for StubAccount {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(Session {
                user_id: Uuid::new_v4(),
                email: credentials.email.clone(),
                expires_at: Utc::now(),
            }),
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, BackendError> {
        self.sign_in(credentials).await
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

fn notes_repo(client: StubNotes) -> NotesRepository<StubNotes> {
    NotesRepository::new(client, Arc::new(RecordingSink::new()))
}

#[tokio::test]
async fn empty_patch_is_a_noop_success_with_zero_client_calls() {
    let repo = notes_repo(StubNotes::default());
    let outcome = repo.update(Uuid::new_v4(), &NoteChanges::default()).await;

    assert_eq!(outcome, Ok(None));
    assert_eq!(repo_calls(&repo), 0);
}

#[tokio::test]
async fn missing_row_surfaces_as_classified_database_failure() {
    let gateway_error = PostgrestError {
        code: Some("PGRST116".to_owned()),
        message: "JSON object requested, multiple (or no) rows returned".to_owned(),
        details: None,
        hint: None,
    };
    let repo = notes_repo(StubNotes::failing(gateway_error.into()));

    let outcome = repo.get(Uuid::new_v4()).await;
    let failure = outcome.expect_err("stub always fails");
    assert_eq!(failure.category(), FailureCategory::Database);
    assert_eq!(failure.message_key(), MessageKey::ErrorDatabaseNotFound);
    assert_eq!(failure.vendor_code(), Some("PGRST116"));
}

#[tokio::test]
async fn network_failure_is_marked_retryable() {
    let repo = notes_repo(StubNotes::failing(BackendError::network(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))));

    let failure = repo.list(Uuid::new_v4()).await.expect_err("stub always fails");
    assert_eq!(failure.category(), FailureCategory::Network);
    assert!(failure.is_retryable());
}

#[tokio::test]
async fn blank_title_fails_validation_before_any_client_call() {
    let repo = notes_repo(StubNotes::default());
    let draft = NoteDraft {
        title: "   ".to_owned(),
        ..NoteDraft::default()
    };

    let failure = repo.create(&draft).await.expect_err("blank title");
    assert_eq!(
        failure,
        Failure::validation(
            MessageKey::ErrorValidationEmptyTitle,
            Some("title".to_owned())
        )
    );
    assert_eq!(repo_calls(&repo), 0);
}

#[tokio::test]
async fn overlong_title_in_a_patch_fails_validation() {
    let repo = notes_repo(StubNotes::default());
    let changes = NoteChanges {
        title: Some("x".repeat(201)),
        ..NoteChanges::default()
    };

    let failure = repo
        .update(Uuid::new_v4(), &changes)
        .await
        .expect_err("overlong title");
    assert_eq!(failure.message_key(), MessageKey::ErrorValidationTitleTooLong);
    assert_eq!(repo_calls(&repo), 0);
}

#[tokio::test]
async fn nonempty_patch_reaches_the_client() {
    let repo = notes_repo(StubNotes::default());
    let changes = NoteChanges {
        pinned: Some(true),
        ..NoteChanges::default()
    };

    let outcome = repo.update(Uuid::new_v4(), &changes).await;
    assert!(matches!(outcome, Ok(Some(_))));
    assert_eq!(repo_calls(&repo), 1);
}

#[tokio::test]
async fn invalid_grant_surfaces_as_invalid_credentials() {
    let auth_error = AuthApiError {
        code: Some("invalid_grant".to_owned()),
        status: Some(400),
        message: "invalid grant".to_owned(),
    };
    let repo = AccountRepository::new(
        StubAccount {
            error: Some(auth_error.into()),
        },
        Arc::new(RecordingSink::new()),
    );

    let failure = repo
        .sign_in(&Credentials {
            email: "a@b.c".to_owned(),
            password: "hunter2".to_owned(),
        })
        .await
        .expect_err("stub always fails");
    assert_eq!(failure.category(), FailureCategory::Auth);
    assert_eq!(failure.message_key(), MessageKey::ErrorAuthInvalidCredentials);
    assert!(!failure.is_retryable());
}

fn repo_calls(repo: &NotesRepository<StubNotes>) -> usize {
    repo.client().calls.load(Ordering::SeqCst)
}
