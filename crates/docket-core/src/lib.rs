#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Docket Core
//!
//! Shared data model for the Docket case-visibility engine.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Identifiers, roles, principals, and case entities
//! - [`snapshot`]: Caller-owned bundle of every entity collection

pub mod error;
pub mod snapshot;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use snapshot::Snapshot;
pub use types::{
    ApprovalStatus, BillingEntry, BillingStatus, Case, CaseId, CaseStatus, ClientInvoice,
    Document, DocumentCategory, DocumentId, EventId, FirmId, InternEntry, InvoiceId, LawFirm,
    MeetingRequest, MeetingStatus, Milestone, MilestoneId, MilestoneKind, MilestoneStatus, Note,
    NoteId, Principal, PrincipalId, Priority, RequestId, Role, Task, TaskId, TaskStatus,
    TimelineEvent, TimelineEventKind, UnknownRole,
};
