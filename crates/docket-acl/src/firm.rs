//! Firm-wide views for firm administrators.

use crate::enforcement::{is_firm_admin, principal_firm};
use crate::policy::VisibilityEngine;
use docket_core::{Case, CaseStatus, LawFirm, Principal, PrincipalId, Role, Snapshot, Task};
use std::collections::HashSet;

/// A firm's people, cases, and tasks.
///
/// Firm cases are those whose assigned lawyer belongs to the firm; firm
/// tasks are those assigned to or by any firm member.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmScope<'a> {
    /// The firm.
    pub firm: &'a LawFirm,
    /// Users whose `firm_id` is this firm.
    pub users: Vec<&'a Principal>,
    /// Lawyers and firm admins of the firm.
    pub lawyers: Vec<&'a Principal>,
    /// Interns of the firm.
    pub interns: Vec<&'a Principal>,
    /// Cases handled by firm lawyers.
    pub cases: Vec<&'a Case>,
    /// Tasks involving firm users.
    pub tasks: Vec<&'a Task>,
}

impl<'a> FirmScope<'a> {
    /// Collects the firm's users, cases, and tasks.
    pub fn build(
        firm: &'a LawFirm,
        users: &'a [Principal],
        cases: &'a [Case],
        tasks: &'a [Task],
    ) -> Self {
        let users: Vec<&Principal> = users
            .iter()
            .filter(|u| u.firm_id.as_ref() == Some(&firm.id))
            .collect();
        let lawyers: Vec<&Principal> = users
            .iter()
            .copied()
            .filter(|u| u.role.is_attorney())
            .collect();
        let interns = users
            .iter()
            .copied()
            .filter(|u| u.role == Role::Intern)
            .collect();

        let lawyer_ids: HashSet<&PrincipalId> = lawyers.iter().map(|u| &u.id).collect();
        let user_ids: HashSet<&PrincipalId> = users.iter().map(|u| &u.id).collect();

        let cases = cases
            .iter()
            .filter(|c| lawyer_ids.contains(&c.assigned_lawyer_id))
            .collect();
        let tasks = tasks
            .iter()
            .filter(|t| {
                user_ids.contains(&t.assigned_to_id) || user_ids.contains(&t.assigned_by_id)
            })
            .collect();

        Self {
            firm,
            users,
            lawyers,
            interns,
            cases,
            tasks,
        }
    }

    /// Number of active firm cases.
    pub fn active_case_count(&self) -> usize {
        self.count_cases(CaseStatus::Active)
    }

    /// Number of closed firm cases.
    pub fn closed_case_count(&self) -> usize {
        self.count_cases(CaseStatus::Closed)
    }

    /// Users waiting for approval to join the firm.
    pub fn pending_members(&self) -> Vec<&'a Principal> {
        self.users
            .iter()
            .copied()
            .filter(|u| self.firm.pending_approvals.contains(&u.id))
            .collect()
    }

    fn count_cases(&self, status: CaseStatus) -> usize {
        self.cases.iter().filter(|c| c.status == status).count()
    }
}

impl VisibilityEngine {
    /// Builds the firm view for a firm administrator.
    ///
    /// Returns `None` if `principal` does not administer a firm or their
    /// firm is missing from the snapshot.
    pub fn firm_scope<'a>(
        &self,
        principal: &Principal,
        snapshot: &'a Snapshot,
    ) -> Option<FirmScope<'a>> {
        if !is_firm_admin(principal, &snapshot.firms) {
            return None;
        }
        let firm = principal_firm(principal, &snapshot.firms)?;
        let scope = FirmScope::build(firm, &snapshot.users, &snapshot.cases, &snapshot.tasks);
        log::debug!(
            "Firm scope for {principal} ({}): {} users, {} cases, {} tasks",
            firm.id,
            scope.users.len(),
            scope.cases.len(),
            scope.tasks.len()
        );
        Some(scope)
    }
}
