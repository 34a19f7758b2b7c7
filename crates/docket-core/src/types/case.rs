//! Cases.

use super::{CaseId, PrincipalId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    /// Case is being worked.
    #[default]
    Active,
    /// Accepted but not yet started.
    Pending,
    /// Finished.
    Closed,
    /// Paused.
    OnHold,
}

/// Priority shared by cases and tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Urgent.
    High,
    /// Normal.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

/// A legal matter.
///
/// A case has exactly one assigned lawyer (its owner) and any number of
/// supporting interns, who get shared, non-owning access. The client is
/// identified by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Unique case id.
    pub id: CaseId,
    /// Case title.
    #[serde(default)]
    pub title: String,
    /// Owning lawyer.
    pub assigned_lawyer_id: PrincipalId,
    /// Interns with shared access, in the order they were added.
    #[serde(default)]
    pub supporting_intern_ids: Vec<PrincipalId>,
    /// Email of the client this case is for.
    pub client_email: String,
    /// Practice area (e.g. "Corporate Law").
    #[serde(default)]
    pub case_type: String,
    /// Current status.
    #[serde(default)]
    pub status: CaseStatus,
    /// Current priority.
    #[serde(default)]
    pub priority: Priority,
    /// When the case was opened.
    pub created_at: DateTime<Utc>,
    /// When the case was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// Creates an active case with no supporting interns, stamped now.
    pub fn new(
        id: impl Into<CaseId>,
        assigned_lawyer_id: impl Into<PrincipalId>,
        client_email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: String::new(),
            assigned_lawyer_id: assigned_lawyer_id.into(),
            supporting_intern_ids: Vec::new(),
            client_email: client_email.into(),
            case_type: String::new(),
            status: CaseStatus::default(),
            priority: Priority::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a supporting intern. Adding the same intern twice is a no-op.
    pub fn with_intern(mut self, intern_id: impl Into<PrincipalId>) -> Self {
        let intern_id = intern_id.into();
        if !self.supporting_intern_ids.contains(&intern_id) {
            self.supporting_intern_ids.push(intern_id);
        }
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns `true` if `principal` is this case's assigned lawyer.
    pub fn is_owned_by(&self, principal: &PrincipalId) -> bool {
        &self.assigned_lawyer_id == principal
    }

    /// Returns `true` if `principal` is one of the supporting interns.
    pub fn is_supported_by(&self, principal: &PrincipalId) -> bool {
        self.supporting_intern_ids.contains(principal)
    }
}
