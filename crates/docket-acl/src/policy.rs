//! Role-based visibility rules.
//!
//! [`VisibilityEngine`] maps a principal and the caller's full entity
//! collections to the subsets that principal may see:
//!
//! | role | cases | tasks | milestones |
//! |------|-------|-------|------------|
//! | lawyer | assigned to them | assigned to or by them, or on a visible case | on a visible case |
//! | intern | they support | assigned to them, or on a visible case | on a visible case |
//! | client | matching their email | client-visible and assigned to them | on a visible case |
//! | admin, firm-admin | all | all | all |
//! | anything else | none | none | none |
//!
//! Results are references into the input slices, in source order. Nothing is
//! copied, and nothing outside the inputs is ever returned.

use crate::config::{ClientTaskScope, VisibilityConfig};
use docket_core::{Case, CaseId, Document, Milestone, Principal, Role, Snapshot, Task};
use std::collections::HashSet;

// ============================================================================
// Result types
// ============================================================================

/// The cases, tasks, and milestones a principal may see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleSet<'a> {
    /// Visible cases, in source order.
    pub cases: Vec<&'a Case>,
    /// Visible tasks, in source order.
    pub tasks: Vec<&'a Task>,
    /// Visible milestones, in source order.
    pub milestones: Vec<&'a Milestone>,
}

impl<'a> VisibleSet<'a> {
    /// A set granting nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ids of the visible cases.
    pub fn case_ids(&self) -> HashSet<CaseId> {
        self.cases.iter().map(|c| c.id.clone()).collect()
    }

    /// Returns `true` if the case with `id` is visible.
    pub fn contains_case(&self, id: &CaseId) -> bool {
        self.cases.iter().any(|c| &c.id == id)
    }

    /// Looks up a visible case by id.
    pub fn find_case(&self, id: &CaseId) -> Option<&'a Case> {
        self.cases.iter().copied().find(|c| &c.id == id)
    }

    /// Returns `true` if nothing at all is visible.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.tasks.is_empty() && self.milestones.is_empty()
    }
}

/// The client dashboard's active case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedView<'a> {
    /// The case the client dashboard opens on. `None` means "render the
    /// empty state".
    pub selected_case: Option<&'a Case>,
    /// Every case matching the client, in the configured order.
    pub matching_cases: Vec<&'a Case>,
}

impl DerivedView<'_> {
    /// Returns `true` when more than one case matched, so only the first is
    /// surfaced as the active case.
    pub fn is_ambiguous(&self) -> bool {
        self.matching_cases.len() > 1
    }
}

// ============================================================================
// VisibilityEngine
// ============================================================================

/// Stateless visibility and authorization engine.
///
/// Holds only configuration; every call re-derives its answer from the
/// collections passed in. Safe to share across threads.
///
/// # Example
///
/// ```
/// use docket_acl::VisibilityEngine;
/// use docket_core::{Case, Principal, Role, Task};
///
/// let engine = VisibilityEngine::default();
/// let lawyer = Principal::new("1", "l1@firm.com", Role::Lawyer);
/// let cases = vec![Case::new("1", "1", "a@x.com"), Case::new("2", "7", "b@x.com")];
/// let tasks = vec![Task::new("t1", "1", "2", "1")];
///
/// let view = engine.filter_for_principal(&lawyer, &cases, &tasks, &[]);
/// assert_eq!(view.cases.len(), 1);
/// assert_eq!(view.tasks.len(), 1);
/// assert!(engine.can_edit_case(&lawyer, &cases[0]));
/// assert!(!engine.can_edit_case(&lawyer, &cases[1]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VisibilityEngine {
    config: VisibilityConfig,
}

impl VisibilityEngine {
    /// Creates an engine with the given rule settings.
    pub fn new(config: VisibilityConfig) -> Self {
        Self { config }
    }

    /// Returns the rule settings.
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Filters cases, tasks, and milestones down to what `principal` may see.
    pub fn filter_for_principal<'a>(
        &self,
        principal: &Principal,
        cases: &'a [Case],
        tasks: &'a [Task],
        milestones: &'a [Milestone],
    ) -> VisibleSet<'a> {
        let visible = match &principal.role {
            Role::Lawyer => {
                let cases: Vec<&Case> = cases
                    .iter()
                    .filter(|c| c.is_owned_by(&principal.id))
                    .collect();
                let ids = ids_of(&cases);
                let tasks = tasks
                    .iter()
                    .filter(|t| {
                        t.assigned_to_id == principal.id
                            || t.assigned_by_id == principal.id
                            || ids.contains(&t.case_id)
                    })
                    .collect();
                VisibleSet {
                    milestones: on_cases(milestones, &ids),
                    cases,
                    tasks,
                }
            }
            Role::Intern => {
                let cases: Vec<&Case> = cases
                    .iter()
                    .filter(|c| c.is_supported_by(&principal.id))
                    .collect();
                let ids = ids_of(&cases);
                let tasks = tasks
                    .iter()
                    .filter(|t| t.assigned_to_id == principal.id || ids.contains(&t.case_id))
                    .collect();
                VisibleSet {
                    milestones: on_cases(milestones, &ids),
                    cases,
                    tasks,
                }
            }
            Role::Client => {
                let cases = client_cases(principal, cases);
                let ids = ids_of(&cases);
                let tasks = tasks
                    .iter()
                    .filter(|t| t.is_client_visible)
                    .filter(|t| match self.config.client_tasks {
                        ClientTaskScope::Assigned => t.assigned_to_id == principal.id,
                        ClientTaskScope::Case => ids.contains(&t.case_id),
                    })
                    .collect();
                VisibleSet {
                    milestones: on_cases(milestones, &ids),
                    cases,
                    tasks,
                }
            }
            Role::Admin | Role::FirmAdmin => VisibleSet {
                cases: cases.iter().collect(),
                tasks: tasks.iter().collect(),
                milestones: milestones.iter().collect(),
            },
            Role::SystemAdmin => VisibleSet::empty(),
            Role::Unrecognized(raw) => {
                log::warn!(
                    "Principal '{}' has unrecognized role '{raw}'; granting no visibility",
                    principal.id
                );
                VisibleSet::empty()
            }
        };

        log::debug!(
            "Visibility for {principal}: {}/{} cases, {}/{} tasks, {}/{} milestones",
            visible.cases.len(),
            cases.len(),
            visible.tasks.len(),
            tasks.len(),
            visible.milestones.len(),
            milestones.len()
        );
        visible
    }

    /// [`filter_for_principal`](Self::filter_for_principal) over a snapshot.
    pub fn view<'a>(&self, principal: &Principal, snapshot: &'a Snapshot) -> VisibleSet<'a> {
        self.filter_for_principal(
            principal,
            &snapshot.cases,
            &snapshot.tasks,
            &snapshot.milestones,
        )
    }

    /// Filters documents down to those on `visible_case_ids` that
    /// `principal` may see.
    ///
    /// Clients additionally require `is_client_visible`; staff see every
    /// document on a case they can access. Roles outside the visibility
    /// table see nothing regardless of the ids passed in.
    pub fn filter_documents_for_principal<'a>(
        &self,
        principal: &Principal,
        documents: &'a [Document],
        visible_case_ids: &HashSet<CaseId>,
    ) -> Vec<&'a Document> {
        let client_only = match principal.role {
            Role::Client => true,
            Role::Lawyer | Role::Intern | Role::Admin | Role::FirmAdmin => false,
            Role::SystemAdmin | Role::Unrecognized(_) => return Vec::new(),
        };
        documents
            .iter()
            .filter(|d| {
                let visible = visible_case_ids.contains(&d.case_id);
                if !visible {
                    log::trace!("Dropping document '{}': case '{}' not visible", d.id, d.case_id);
                }
                visible
            })
            .filter(|d| !client_only || d.is_client_visible)
            .collect()
    }

    /// Returns `true` if `principal` may edit `case`.
    ///
    /// Firm admins may edit any case; a lawyer may edit only the cases
    /// assigned to them. Nobody else may edit.
    pub fn can_edit_case(&self, principal: &Principal, case: &Case) -> bool {
        match principal.role {
            Role::FirmAdmin => true,
            Role::Lawyer => case.is_owned_by(&principal.id),
            _ => false,
        }
    }

    /// Derives a client's active case from the full case collection.
    ///
    /// Non-clients and clients with no matching case get an empty view.
    pub fn resolve_derived_view<'a>(
        &self,
        principal: &Principal,
        cases: &'a [Case],
    ) -> DerivedView<'a> {
        if principal.role != Role::Client {
            return DerivedView::default();
        }

        let mut matching = client_cases(principal, cases);
        self.config.case_order.apply(&mut matching);
        if matching.len() > 1 {
            log::warn!(
                "Client '{}' matches {} cases; using '{}' as the active case",
                principal.id,
                matching.len(),
                matching[0].id
            );
        }

        DerivedView {
            selected_case: matching.first().copied(),
            matching_cases: matching,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn ids_of(cases: &[&Case]) -> HashSet<CaseId> {
    cases.iter().map(|c| c.id.clone()).collect()
}

fn on_cases<'a>(milestones: &'a [Milestone], ids: &HashSet<CaseId>) -> Vec<&'a Milestone> {
    milestones
        .iter()
        .filter(|m| {
            let visible = ids.contains(&m.case_id);
            if !visible {
                log::trace!("Dropping milestone '{}': case '{}' not visible", m.id, m.case_id);
            }
            visible
        })
        .collect()
}

// An empty email never matches, even a case with an empty client email.
fn client_cases<'a>(principal: &Principal, cases: &'a [Case]) -> Vec<&'a Case> {
    if principal.email.is_empty() {
        return Vec::new();
    }
    cases
        .iter()
        .filter(|c| c.client_email == principal.email)
        .collect()
}
