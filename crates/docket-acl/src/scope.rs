//! Per-case and per-client projections built on the visibility rules.

use crate::policy::VisibilityEngine;
use docket_core::{
    BillingEntry, Case, CaseId, ClientInvoice, Document, MeetingRequest, Milestone, Note,
    Principal, Role, Snapshot, Task, TimelineEvent,
};
use std::collections::HashSet;

/// Everything shown on a single case's detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseScope<'a> {
    /// The selected case.
    pub case: &'a Case,
    /// Whether the principal may edit the case.
    pub editable: bool,
    /// Visible tasks on the case.
    pub tasks: Vec<&'a Task>,
    /// Milestones on the case.
    pub milestones: Vec<&'a Milestone>,
    /// Timeline events on the case.
    pub timeline_events: Vec<&'a TimelineEvent>,
    /// Pre-engagement events on the case.
    pub pre_engagement_events: Vec<&'a TimelineEvent>,
    /// Documents the principal may see on the case.
    pub documents: Vec<&'a Document>,
    /// Internal notes; empty for clients.
    pub notes: Vec<&'a Note>,
    /// Internal billing entries; empty for clients.
    pub billing_entries: Vec<&'a BillingEntry>,
    /// Client invoices on the case.
    pub invoices: Vec<&'a ClientInvoice>,
    /// Meeting requests on the case.
    pub meeting_requests: Vec<&'a MeetingRequest>,
}

/// A client's portal: their cases and everything attached to them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientOverview<'a> {
    /// The client's cases.
    pub cases: Vec<&'a Case>,
    /// The case the portal opens on.
    pub active_case: Option<&'a Case>,
    /// Client-visible tasks.
    pub tasks: Vec<&'a Task>,
    /// Milestones on the client's cases.
    pub milestones: Vec<&'a Milestone>,
    /// Invoices on the client's cases.
    pub invoices: Vec<&'a ClientInvoice>,
    /// Meeting requests on the client's cases.
    pub meeting_requests: Vec<&'a MeetingRequest>,
}

impl VisibilityEngine {
    /// Builds the detail view of `case_id` for `principal`.
    ///
    /// Returns `None` unless the case is in the principal's visible set;
    /// naming a case id is never enough to reach it.
    pub fn case_scope<'a>(
        &self,
        principal: &Principal,
        snapshot: &'a Snapshot,
        case_id: &CaseId,
    ) -> Option<CaseScope<'a>> {
        let visible = self.view(principal, snapshot);
        let Some(case) = visible.find_case(case_id) else {
            log::trace!("Case '{case_id}' is not visible to {principal}");
            return None;
        };

        let is_client = principal.role == Role::Client;
        let on_case: HashSet<CaseId> = [case.id.clone()].into_iter().collect();

        Some(CaseScope {
            case,
            editable: self.can_edit_case(principal, case),
            tasks: visible
                .tasks
                .iter()
                .copied()
                .filter(|t| t.case_id == case.id)
                .collect(),
            milestones: visible
                .milestones
                .iter()
                .copied()
                .filter(|m| m.case_id == case.id)
                .collect(),
            timeline_events: on(&snapshot.timeline_events, case, |e| &e.case_id),
            pre_engagement_events: on(&snapshot.pre_engagement_events, case, |e| &e.case_id),
            documents: self.filter_documents_for_principal(
                principal,
                &snapshot.documents,
                &on_case,
            ),
            notes: if is_client {
                Vec::new()
            } else {
                on(&snapshot.notes, case, |n| &n.case_id)
            },
            billing_entries: if is_client {
                Vec::new()
            } else {
                on(&snapshot.billing_entries, case, |b| &b.case_id)
            },
            invoices: on(&snapshot.client_invoices, case, |i| &i.case_id),
            meeting_requests: on(&snapshot.meeting_requests, case, |m| &m.case_id),
        })
    }

    /// Builds the client portal for `principal`.
    ///
    /// Non-clients get an empty overview.
    pub fn client_overview<'a>(
        &self,
        principal: &Principal,
        snapshot: &'a Snapshot,
    ) -> ClientOverview<'a> {
        if principal.role != Role::Client {
            return ClientOverview::default();
        }

        let visible = self.view(principal, snapshot);
        let ids = visible.case_ids();
        let derived = self.resolve_derived_view(principal, &snapshot.cases);

        ClientOverview {
            active_case: derived.selected_case,
            invoices: snapshot
                .client_invoices
                .iter()
                .filter(|i| ids.contains(&i.case_id))
                .collect(),
            meeting_requests: snapshot
                .meeting_requests
                .iter()
                .filter(|m| ids.contains(&m.case_id))
                .collect(),
            cases: visible.cases,
            tasks: visible.tasks,
            milestones: visible.milestones,
        }
    }
}

fn on<'a, T>(items: &'a [T], case: &Case, case_of: impl Fn(&T) -> &CaseId) -> Vec<&'a T> {
    items.iter().filter(|i| case_of(*i) == &case.id).collect()
}
