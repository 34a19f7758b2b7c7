//! Authenticated principals.

use super::{FirmId, PrincipalId, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account approval state.
///
/// New staff accounts joining an existing firm start out `Pending` until a
/// firm or system administrator approves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting approval; no case data is served.
    Pending,
    /// Fully active account.
    #[default]
    Approved,
    /// Sign-up was refused.
    Rejected,
}

impl ApprovalStatus {
    /// Returns `true` if the account is approved.
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// The authenticated user an authorization decision is made for.
///
/// A principal holds exactly one [`Role`]. Credentials are not part of this
/// type; whoever constructs a principal has already authenticated it.
///
/// # Example
///
/// ```
/// use docket_core::{Principal, Role};
///
/// let lawyer = Principal::new("2", "robert@firm.com", Role::Lawyer).with_firm("1");
/// assert_eq!(lawyer.id.as_str(), "2");
/// assert!(lawyer.approval_status.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Unique user id.
    pub id: PrincipalId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address; clients are matched to cases by it.
    pub email: String,
    /// The principal's single role.
    pub role: Role,
    /// Firm the principal belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firm_id: Option<FirmId>,
    /// Approval state of the account.
    #[serde(default)]
    pub approval_status: ApprovalStatus,
}

impl Principal {
    /// Creates an approved principal with no firm and an empty name.
    pub fn new(id: impl Into<PrincipalId>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: email.into(),
            role,
            firm_id: None,
            approval_status: ApprovalStatus::Approved,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the firm.
    pub fn with_firm(mut self, firm_id: impl Into<FirmId>) -> Self {
        self.firm_id = Some(firm_id.into());
        self
    }

    /// Sets the approval status.
    pub fn with_approval(mut self, status: ApprovalStatus) -> Self {
        self.approval_status = status;
        self
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.id)
    }
}
