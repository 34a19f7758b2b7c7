//! Documents and notes attached to cases.

use super::{CaseId, DocumentId, NoteId, PrincipalId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filing category of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    /// Court pleading.
    Pleading,
    /// Evidence.
    Evidence,
    /// Letters and email.
    Correspondence,
    /// Research material.
    Research,
    /// Anything else.
    #[default]
    Other,
}

/// An uploaded file on a case.
///
/// Staff see every document on a case they can access; clients only see
/// documents flagged `is_client_visible`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document id.
    pub id: DocumentId,
    /// Case the document is filed under.
    pub case_id: CaseId,
    /// File name.
    #[serde(default)]
    pub name: String,
    /// Filing category.
    #[serde(default)]
    pub category: DocumentCategory,
    /// Uploader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by_id: Option<PrincipalId>,
    /// Upload time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
    /// Whether the client may see this document.
    #[serde(default)]
    pub is_client_visible: bool,
}

impl Document {
    /// Creates a staff-only document.
    pub fn new(id: impl Into<DocumentId>, case_id: impl Into<CaseId>) -> Self {
        Self {
            id: id.into(),
            case_id: case_id.into(),
            name: String::new(),
            category: DocumentCategory::default(),
            uploaded_by_id: None,
            uploaded_at: None,
            is_client_visible: false,
        }
    }

    /// Sets the file name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the document as visible (or not) to the client.
    pub fn client_visible(mut self, visible: bool) -> Self {
        self.is_client_visible = visible;
        self
    }
}

/// An internal note on a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique note id.
    pub id: NoteId,
    /// Case the note belongs to.
    pub case_id: CaseId,
    /// Note body.
    pub content: String,
    /// Author.
    pub author_id: PrincipalId,
    /// Private notes are meant for the author's eyes.
    #[serde(default)]
    pub is_private: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
