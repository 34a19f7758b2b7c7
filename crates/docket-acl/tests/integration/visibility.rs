//! Role-by-role visibility over the firm fixture, plus the reference
//! scenarios for lawyer/intern task sharing and client documents.

use crate::common::{firm_snapshot, ids_of, user};
use docket_acl::{ClientTaskScope, VisibilityConfig, VisibilityEngine};
use docket_core::{Case, CaseId, Document, Milestone, Principal, Role, Task};
use std::collections::HashSet;

fn case_ids(cases: &[&Case]) -> Vec<String> {
    ids_of(cases, |c| c.id.as_str())
}

fn task_ids(tasks: &[&Task]) -> Vec<String> {
    ids_of(tasks, |t| t.id.as_str())
}

fn milestone_ids(milestones: &[&Milestone]) -> Vec<String> {
    ids_of(milestones, |m| m.id.as_str())
}

fn doc_ids(docs: &[&Document]) -> Vec<String> {
    ids_of(docs, |d| d.id.as_str())
}

// ============================================================================
// Firm fixture
// ============================================================================

#[test]
fn lawyer_sees_own_cases_and_related_tasks() {
    let snapshot = firm_snapshot();
    let emily = user(&snapshot, "3");
    let view = VisibilityEngine::default().view(&emily, &snapshot);

    assert_eq!(case_ids(&view.cases), vec!["101"]);
    assert_eq!(task_ids(&view.tasks), vec!["t1", "t2", "t5"]);
    assert_eq!(milestone_ids(&view.milestones), vec!["m1"]);
}

#[test]
fn firm_admin_sees_everything() {
    let snapshot = firm_snapshot();
    let robert = user(&snapshot, "2");
    let view = VisibilityEngine::default().view(&robert, &snapshot);

    assert_eq!(view.cases.len(), snapshot.cases.len());
    assert_eq!(view.tasks.len(), snapshot.tasks.len());
    assert_eq!(view.milestones.len(), snapshot.milestones.len());
}

#[test]
fn interns_see_supported_cases() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();

    let mike = engine.view(&user(&snapshot, "4"), &snapshot);
    assert_eq!(case_ids(&mike.cases), vec!["101", "102"]);
    assert_eq!(mike.tasks.len(), 5);

    let sara = engine.view(&user(&snapshot, "5"), &snapshot);
    assert_eq!(case_ids(&sara.cases), vec!["102"]);
    assert_eq!(task_ids(&sara.tasks), vec!["t3", "t4", "t5"]);
    assert_eq!(milestone_ids(&sara.milestones), vec!["m2"]);
}

#[test]
fn clients_see_their_case_and_client_tasks() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();

    let acme = user(&snapshot, "6");
    let view = engine.view(&acme, &snapshot);
    assert_eq!(case_ids(&view.cases), vec!["101"]);
    assert_eq!(task_ids(&view.tasks), vec!["t2"]);
    assert_eq!(milestone_ids(&view.milestones), vec!["m1"]);

    let docs = engine.filter_documents_for_principal(&acme, &snapshot.documents, &view.case_ids());
    assert_eq!(doc_ids(&docs), vec!["d1"]);

    let jane = user(&snapshot, "7");
    let view = engine.view(&jane, &snapshot);
    assert_eq!(case_ids(&view.cases), vec!["102"]);
    assert_eq!(task_ids(&view.tasks), vec!["t4"]);
}

#[test]
fn client_without_case_gets_empty_portal() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();
    let nobody = user(&snapshot, "8");

    assert!(engine.view(&nobody, &snapshot).is_empty());
    let derived = engine.resolve_derived_view(&nobody, &snapshot.cases);
    assert!(derived.selected_case.is_none());
}

#[test]
fn system_admin_sees_no_case_data() {
    let snapshot = firm_snapshot();
    let admin = user(&snapshot, "1");
    assert!(VisibilityEngine::default().view(&admin, &snapshot).is_empty());
}

#[test]
fn staff_documents_include_hidden_ones() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();
    let emily = user(&snapshot, "3");
    let view = engine.view(&emily, &snapshot);

    let docs = engine.filter_documents_for_principal(&emily, &snapshot.documents, &view.case_ids());
    assert_eq!(doc_ids(&docs), vec!["d1", "d2"]);
}

#[test]
fn edit_rights_follow_ownership() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();
    let (acme_case, doe_case) = (&snapshot.cases[0], &snapshot.cases[1]);

    let emily = user(&snapshot, "3");
    assert!(engine.can_edit_case(&emily, acme_case));
    assert!(!engine.can_edit_case(&emily, doe_case));

    let robert = user(&snapshot, "2");
    assert!(engine.can_edit_case(&robert, acme_case));
    assert!(engine.can_edit_case(&robert, doe_case));

    let mike = user(&snapshot, "4");
    assert!(!engine.can_edit_case(&mike, acme_case));
    assert!(!engine.can_edit_case(&user(&snapshot, "6"), acme_case));
}

#[test]
fn case_scoped_client_tasks_are_configurable() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::new(VisibilityConfig {
        client_tasks: ClientTaskScope::Case,
        ..Default::default()
    });
    let acme = user(&snapshot, "6");
    let view = engine.view(&acme, &snapshot);
    assert_eq!(task_ids(&view.tasks), vec!["t2"]);

    let jane = user(&snapshot, "7");
    let view = engine.view(&jane, &snapshot);
    assert_eq!(task_ids(&view.tasks), vec!["t4"]);
}

#[test]
fn filtering_is_repeatable() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();
    let mike = user(&snapshot, "4");
    assert_eq!(engine.view(&mike, &snapshot), engine.view(&mike, &snapshot));
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn lawyer_sees_intern_task_on_owned_case() {
    let cases = vec![Case::new("1", "1", "client@x.com").with_intern("2")];
    let tasks = vec![Task::new("T1", "1", "2", "2")];
    let engine = VisibilityEngine::default();

    let lawyer = Principal::new("1", "l1@firm.com", Role::Lawyer);
    let view = engine.filter_for_principal(&lawyer, &cases, &tasks, &[]);
    assert_eq!(task_ids(&view.tasks), vec!["T1"]);

    let intern = Principal::new("2", "i1@firm.com", Role::Intern);
    let view = engine.filter_for_principal(&intern, &cases, &tasks, &[]);
    assert_eq!(case_ids(&view.cases), vec!["1"]);
    assert_eq!(task_ids(&view.tasks), vec!["T1"]);

    let stranger = Principal::new("3", "someone@else.com", Role::Client);
    let view = engine.filter_for_principal(&stranger, &cases, &tasks, &[]);
    assert!(view.cases.is_empty());
    assert!(view.tasks.is_empty());
}

#[test]
fn client_sees_only_flagged_documents() {
    let cases = vec![Case::new("5", "1", "a@x.com")];
    let documents = vec![
        Document::new("d1", "5").client_visible(true),
        Document::new("d2", "5").client_visible(false),
    ];
    let engine = VisibilityEngine::default();
    let client = Principal::new("C", "a@x.com", Role::Client);

    let view = engine.filter_for_principal(&client, &cases, &[], &[]);
    assert_eq!(case_ids(&view.cases), vec!["5"]);

    let docs = engine.filter_documents_for_principal(&client, &documents, &view.case_ids());
    assert_eq!(doc_ids(&docs), vec!["d1"]);
}

#[test]
fn document_filter_respects_visible_ids_only() {
    let documents = vec![Document::new("d1", "5").client_visible(true)];
    let client = Principal::new("C", "a@x.com", Role::Client);
    let none: HashSet<CaseId> = HashSet::new();
    assert!(VisibilityEngine::default()
        .filter_documents_for_principal(&client, &documents, &none)
        .is_empty());
}

// ============================================================================
// Case and client views
// ============================================================================

#[test]
fn case_scope_for_owning_lawyer() {
    let snapshot = firm_snapshot();
    let emily = user(&snapshot, "3");
    let scope = VisibilityEngine::default()
        .case_scope(&emily, &snapshot, &CaseId::new("101"))
        .unwrap();

    assert!(scope.editable);
    assert_eq!(task_ids(&scope.tasks), vec!["t1", "t2"]);
    assert_eq!(doc_ids(&scope.documents), vec!["d1", "d2"]);
    assert_eq!(scope.notes.len(), 1);
    assert_eq!(scope.timeline_events.len(), 1);
    assert_eq!(scope.invoices.len(), 1);
}

#[test]
fn case_scope_hides_internal_records_from_client() {
    let snapshot = firm_snapshot();
    let acme = user(&snapshot, "6");
    let scope = VisibilityEngine::default()
        .case_scope(&acme, &snapshot, &CaseId::new("101"))
        .unwrap();

    assert!(!scope.editable);
    assert_eq!(task_ids(&scope.tasks), vec!["t2"]);
    assert_eq!(doc_ids(&scope.documents), vec!["d1"]);
    assert!(scope.notes.is_empty());
    assert!(scope.billing_entries.is_empty());
    assert_eq!(scope.invoices.len(), 1);
}

#[test]
fn case_scope_refuses_invisible_case() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();
    assert!(engine
        .case_scope(&user(&snapshot, "6"), &snapshot, &CaseId::new("102"))
        .is_none());
    assert!(engine
        .case_scope(&user(&snapshot, "5"), &snapshot, &CaseId::new("101"))
        .is_none());
    assert!(engine
        .case_scope(&user(&snapshot, "1"), &snapshot, &CaseId::new("101"))
        .is_none());
}

#[test]
fn client_overview_collects_portal() {
    let snapshot = firm_snapshot();
    let jane = user(&snapshot, "7");
    let overview = VisibilityEngine::default().client_overview(&jane, &snapshot);

    assert_eq!(overview.active_case.map(|c| c.id.as_str()), Some("102"));
    assert_eq!(case_ids(&overview.cases), vec!["102"]);
    assert_eq!(task_ids(&overview.tasks), vec!["t4"]);
    assert_eq!(overview.invoices.len(), 1);
    assert_eq!(overview.invoices[0].id.as_str(), "i2");
    assert_eq!(overview.meeting_requests.len(), 1);
}

#[test]
fn client_overview_empty_for_staff() {
    let snapshot = firm_snapshot();
    let overview = VisibilityEngine::default().client_overview(&user(&snapshot, "3"), &snapshot);
    assert!(overview.cases.is_empty());
    assert!(overview.active_case.is_none());
}
