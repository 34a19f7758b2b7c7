//! Request-boundary checks.
//!
//! The visibility rules assume a real, approved principal. These helpers
//! turn "logged out" and "not yet approved" into errors before any case
//! data is filtered, and pick which dashboard a principal lands on.

use crate::{Error, Result};
use docket_core::{LawFirm, Principal, Role};
use std::fmt;

/// Admits a principal to case data.
///
/// `None` (no session) is rejected as [`Error::Unauthenticated`]; a pending
/// or rejected account as [`Error::NotApproved`]. Principals with an
/// unrecognized role are admitted and then see nothing.
///
/// # Example
///
/// ```
/// use docket_acl::{Error, authorize};
/// use docket_core::{ApprovalStatus, Principal, Role};
///
/// let lawyer = Principal::new("2", "r@firm.com", Role::Lawyer);
/// assert!(authorize(Some(&lawyer)).is_ok());
/// assert!(matches!(authorize(None), Err(Error::Unauthenticated)));
///
/// let pending = lawyer.clone().with_approval(ApprovalStatus::Pending);
/// assert!(matches!(authorize(Some(&pending)), Err(Error::NotApproved { .. })));
/// ```
pub fn authorize(principal: Option<&Principal>) -> Result<&Principal> {
    let principal = principal.ok_or(Error::Unauthenticated)?;
    if !principal.approval_status.is_approved() {
        log::warn!(
            "Refusing case data to {principal}: account is {}",
            principal.approval_status
        );
        return Err(Error::NotApproved {
            principal: principal.id.clone(),
            status: principal.approval_status,
        });
    }
    Ok(principal)
}

/// Returns `true` if `principal` administers a firm.
///
/// Holds for the `firm-admin` role, and for any principal recorded as the
/// admin of their own firm.
pub fn is_firm_admin(principal: &Principal, firms: &[LawFirm]) -> bool {
    if principal.role == Role::FirmAdmin {
        return true;
    }
    principal_firm(principal, firms).is_some_and(|f| f.is_administered_by(&principal.id))
}

/// Looks up the firm a principal belongs to.
pub fn principal_firm<'a>(principal: &Principal, firms: &'a [LawFirm]) -> Option<&'a LawFirm> {
    let firm_id = principal.firm_id.as_ref()?;
    firms.iter().find(|f| &f.id == firm_id)
}

/// Which dashboard a principal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardKind {
    /// User and firm management; no case data.
    SystemAdmin,
    /// Waiting screen for unapproved accounts.
    PendingApproval,
    /// Client portal.
    Client,
    /// Staff dashboard with firm administration.
    FirmAdmin,
    /// Regular staff dashboard.
    Staff,
}

impl DashboardKind {
    /// Resolves the dashboard for `principal`.
    ///
    /// System admins are routed before the approval check; everyone else
    /// must be approved to reach a data dashboard.
    pub fn for_principal(principal: &Principal, firms: &[LawFirm]) -> Self {
        if principal.role == Role::SystemAdmin {
            return Self::SystemAdmin;
        }
        if !principal.approval_status.is_approved() {
            return Self::PendingApproval;
        }
        if principal.role == Role::Client {
            return Self::Client;
        }
        if is_firm_admin(principal, firms) {
            return Self::FirmAdmin;
        }
        Self::Staff
    }

    /// Returns `true` for dashboards that render case data.
    pub fn shows_case_data(&self) -> bool {
        matches!(self, Self::Client | Self::FirmAdmin | Self::Staff)
    }
}

impl fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SystemAdmin => write!(f, "system-admin"),
            Self::PendingApproval => write!(f, "pending-approval"),
            Self::Client => write!(f, "client"),
            Self::FirmAdmin => write!(f, "firm-admin"),
            Self::Staff => write!(f, "staff"),
        }
    }
}
