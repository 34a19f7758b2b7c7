//! Law firms.

use super::{FirmId, PrincipalId};
use serde::{Deserialize, Serialize};

/// A law firm and its membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawFirm {
    /// Unique firm id.
    pub id: FirmId,
    /// Firm name.
    #[serde(default)]
    pub name: String,
    /// The member who administers the firm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<PrincipalId>,
    /// Approved members.
    #[serde(default)]
    pub members: Vec<PrincipalId>,
    /// Users waiting for approval to join.
    #[serde(default)]
    pub pending_approvals: Vec<PrincipalId>,
}

impl LawFirm {
    /// Creates a firm with no members.
    pub fn new(id: impl Into<FirmId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            admin_id: None,
            members: Vec::new(),
            pending_approvals: Vec::new(),
        }
    }

    /// Sets the administrator, adding them as a member if needed.
    pub fn with_admin(mut self, admin_id: impl Into<PrincipalId>) -> Self {
        let admin_id = admin_id.into();
        if !self.members.contains(&admin_id) {
            self.members.push(admin_id.clone());
        }
        self.admin_id = Some(admin_id);
        self
    }

    /// Returns `true` if `principal` administers this firm.
    pub fn is_administered_by(&self, principal: &PrincipalId) -> bool {
        self.admin_id.as_ref() == Some(principal)
    }
}
