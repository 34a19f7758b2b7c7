//! Billing entries, client invoices, and meeting requests.

use super::{CaseId, InvoiceId, PrincipalId, RequestId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment state shared by billing entries and invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    /// Not yet sent.
    #[default]
    Pending,
    /// Sent to the client.
    Sent,
    /// Settled.
    Paid,
    /// Past due.
    Overdue,
    /// Contested by the client.
    Disputed,
}

/// Hours an intern logged against a billing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternEntry {
    /// The intern.
    pub intern_id: PrincipalId,
    /// Hours actually worked.
    pub hours_worked: f64,
    /// Hours billed to the client.
    pub hours_billed: f64,
    /// Hourly rate.
    pub rate: f64,
}

/// Internal billing record for work on a case. Staff only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingEntry {
    /// Unique entry id.
    pub id: InvoiceId,
    /// Case billed.
    pub case_id: CaseId,
    /// Date of the work.
    pub date: DateTime<Utc>,
    /// What was done.
    #[serde(default)]
    pub description: String,
    /// Lawyer hours.
    #[serde(default)]
    pub lawyer_hours: f64,
    /// Lawyer hourly rate.
    #[serde(default)]
    pub lawyer_rate: f64,
    /// Intern contributions.
    #[serde(default)]
    pub intern_entries: Vec<InternEntry>,
    /// Amount billed.
    #[serde(default)]
    pub total_amount: f64,
    /// Payment state.
    #[serde(default)]
    pub status: BillingStatus,
}

/// Invoice as presented to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInvoice {
    /// Unique invoice id.
    pub id: InvoiceId,
    /// Case invoiced.
    pub case_id: CaseId,
    /// Printed invoice number.
    #[serde(default)]
    pub invoice_number: String,
    /// Amount due.
    #[serde(default)]
    pub total_amount: f64,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Payment state.
    #[serde(default)]
    pub status: BillingStatus,
}

/// State of a client's meeting request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    /// Awaiting the lawyer.
    #[default]
    Pending,
    /// Accepted.
    Approved,
    /// Refused.
    Declined,
    /// Held.
    Completed,
}

/// A client's request to meet their lawyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    /// Unique request id.
    pub id: RequestId,
    /// Case concerned.
    pub case_id: CaseId,
    /// Requesting client.
    pub client_id: PrincipalId,
    /// Lawyer asked.
    pub lawyer_id: PrincipalId,
    /// Requested date.
    pub requested_date: DateTime<Utc>,
    /// Purpose.
    #[serde(default)]
    pub purpose: String,
    /// Current state.
    #[serde(default)]
    pub status: MeetingStatus,
}
