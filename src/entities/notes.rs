use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

/// A note as stored by the backend.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// Storage path of the attached voice recording, if any.
    pub audio_path: Option<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: Uuid,
}

/// Fields the client supplies when creating a note; the backend fills in
/// the rest.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub audio_path: Option<String>,
    pub pinned: bool,
}

/// Partial update: only the populated fields are patched.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub audio_path: Option<String>,
    pub pinned: Option<bool>,
}

impl NoteChanges {
    /// An empty patch is absorbed by the repository as a no-op success.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.audio_path.is_none()
            && self.pinned.is_none()
    }
}
