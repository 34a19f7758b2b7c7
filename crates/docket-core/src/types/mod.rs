//! Core types for Docket.

mod billing;
mod case;
mod document;
mod firm;
mod ids;
mod principal;
mod role;
mod task;
mod timeline;

pub use billing::{
    BillingEntry, BillingStatus, ClientInvoice, InternEntry, MeetingRequest, MeetingStatus,
};
pub use case::{Case, CaseStatus, Priority};
pub use document::{Document, DocumentCategory, Note};
pub use firm::LawFirm;
pub use ids::{
    CaseId, DocumentId, EventId, FirmId, InvoiceId, MilestoneId, NoteId, PrincipalId, RequestId,
    TaskId,
};
pub use principal::{ApprovalStatus, Principal};
pub use role::{Role, UnknownRole};
pub use task::{Milestone, MilestoneKind, MilestoneStatus, Task, TaskStatus};
pub use timeline::{TimelineEvent, TimelineEventKind};
