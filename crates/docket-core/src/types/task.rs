//! Tasks and milestones.

use super::{CaseId, MilestoneId, PrincipalId, Priority, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked.
    InProgress,
    /// Done.
    Completed,
    /// Past its due date.
    Overdue,
}

/// A unit of work on a case.
///
/// Every task belongs to exactly one case. `is_client_visible` defaults to
/// `false` when absent from input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task id.
    pub id: TaskId,
    /// Case the task belongs to.
    pub case_id: CaseId,
    /// Task title.
    #[serde(default)]
    pub title: String,
    /// Who does the work.
    pub assigned_to_id: PrincipalId,
    /// Who assigned it.
    pub assigned_by_id: PrincipalId,
    /// Current status.
    #[serde(default)]
    pub status: TaskStatus,
    /// Current priority.
    #[serde(default)]
    pub priority: Priority,
    /// Due date, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the client may see this task.
    #[serde(default)]
    pub is_client_visible: bool,
}

impl Task {
    /// Creates a pending, staff-only task.
    pub fn new(
        id: impl Into<TaskId>,
        case_id: impl Into<CaseId>,
        assigned_to_id: impl Into<PrincipalId>,
        assigned_by_id: impl Into<PrincipalId>,
    ) -> Self {
        Self {
            id: id.into(),
            case_id: case_id.into(),
            title: String::new(),
            assigned_to_id: assigned_to_id.into(),
            assigned_by_id: assigned_by_id.into(),
            status: TaskStatus::default(),
            priority: Priority::default(),
            due_date: None,
            is_client_visible: false,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Marks the task as visible (or not) to the client.
    pub fn client_visible(mut self, visible: bool) -> Self {
        self.is_client_visible = visible;
        self
    }
}

/// Kind of scheduled milestone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneKind {
    /// Appearance before a court.
    CourtAppearance,
    /// Deadline for a court filing.
    FilingDeadline,
    /// Deadline for a document.
    DocumentDeadline,
    /// Meeting.
    #[default]
    Meeting,
    /// Hearing.
    Hearing,
}

/// Whether a milestone has happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    /// Scheduled in the future.
    #[default]
    Upcoming,
    /// Took place.
    Completed,
    /// Passed without happening.
    Missed,
}

/// A dated event on a case's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Unique milestone id.
    pub id: MilestoneId,
    /// Case the milestone belongs to.
    pub case_id: CaseId,
    /// Milestone title.
    #[serde(default)]
    pub title: String,
    /// Kind of milestone.
    #[serde(default, rename = "type")]
    pub kind: MilestoneKind,
    /// Scheduled date.
    pub date: DateTime<Utc>,
    /// Current status.
    #[serde(default)]
    pub status: MilestoneStatus,
}

impl Milestone {
    /// Creates an upcoming meeting milestone.
    pub fn new(
        id: impl Into<MilestoneId>,
        case_id: impl Into<CaseId>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            case_id: case_id.into(),
            title: String::new(),
            kind: MilestoneKind::default(),
            date,
            status: MilestoneStatus::default(),
        }
    }
}
