//! Case timeline events.

use super::{CaseId, EventId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who a timeline event concerns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineEventKind {
    /// Procedural event in the case itself.
    #[default]
    CaseEvent,
    /// Event in the client's life relevant to the case.
    ClientEvent,
}

/// A dated entry on a case timeline.
///
/// The same type is used for pre-engagement events (what happened before the
/// firm took the case); those live in their own collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// Unique event id.
    pub id: EventId,
    /// Case the event belongs to.
    pub case_id: CaseId,
    /// Event title.
    #[serde(default)]
    pub title: String,
    /// When it happened.
    pub date: DateTime<Utc>,
    /// Case or client event.
    #[serde(default, rename = "type")]
    pub kind: TimelineEventKind,
    /// Free-form category label.
    #[serde(default)]
    pub category: String,
}

impl TimelineEvent {
    /// Creates a case event.
    pub fn new(id: impl Into<EventId>, case_id: impl Into<CaseId>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            case_id: case_id.into(),
            title: String::new(),
            date,
            kind: TimelineEventKind::default(),
            category: String::new(),
        }
    }
}
