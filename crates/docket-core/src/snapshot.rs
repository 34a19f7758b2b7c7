//! Caller-owned entity collections.
//!
//! A [`Snapshot`] is the full, unfiltered state of the case-management
//! data at one moment. The owner keeps it; engine operations borrow it for
//! the duration of a single call and hand back references into it.

use crate::types::{
    BillingEntry, Case, CaseId, ClientInvoice, Document, LawFirm, MeetingRequest, Milestone, Note,
    Principal, PrincipalId, Task, TimelineEvent,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every entity collection, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    /// Registered users.
    pub users: Vec<Principal>,
    /// Law firms.
    pub firms: Vec<LawFirm>,
    /// Cases.
    pub cases: Vec<Case>,
    /// Tasks.
    pub tasks: Vec<Task>,
    /// Milestones.
    pub milestones: Vec<Milestone>,
    /// Documents.
    pub documents: Vec<Document>,
    /// Case timeline events.
    pub timeline_events: Vec<TimelineEvent>,
    /// Events from before the firm took the case.
    pub pre_engagement_events: Vec<TimelineEvent>,
    /// Case notes.
    pub notes: Vec<Note>,
    /// Internal billing entries.
    pub billing_entries: Vec<BillingEntry>,
    /// Client-facing invoices.
    pub client_invoices: Vec<ClientInvoice>,
    /// Client meeting requests.
    pub meeting_requests: Vec<MeetingRequest>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a snapshot from JSON.
    ///
    /// Missing collections are treated as empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let snapshot = Self::from_json_str(&content)?;
        log::debug!(
            "Loaded snapshot from {}: {} users, {} cases, {} tasks",
            path.display(),
            snapshot.users.len(),
            snapshot.cases.len(),
            snapshot.tasks.len()
        );
        Ok(snapshot)
    }

    /// Looks up a user by id.
    pub fn find_user(&self, id: &PrincipalId) -> Option<&Principal> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Looks up a case by id.
    pub fn find_case(&self, id: &CaseId) -> Option<&Case> {
        self.cases.iter().find(|c| &c.id == id)
    }
}
