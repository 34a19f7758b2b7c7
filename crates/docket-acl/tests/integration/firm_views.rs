//! Firm administration view.

use crate::common::{firm_snapshot, ids_of, user};
use docket_acl::VisibilityEngine;

#[test]
fn firm_admin_gets_firm_scope() {
    let snapshot = firm_snapshot();
    let robert = user(&snapshot, "2");
    let scope = VisibilityEngine::default()
        .firm_scope(&robert, &snapshot)
        .unwrap();

    assert_eq!(scope.firm.id.as_str(), "1");
    assert_eq!(ids_of(&scope.users, |u| u.id.as_str()), vec!["2", "3", "4", "5", "9"]);
    assert_eq!(ids_of(&scope.lawyers, |u| u.id.as_str()), vec!["2", "3", "9"]);
    assert_eq!(ids_of(&scope.interns, |u| u.id.as_str()), vec!["4", "5"]);
    assert_eq!(scope.cases.len(), 2);
    assert_eq!(scope.tasks.len(), 5);
}

#[test]
fn firm_scope_counts_and_pending() {
    let snapshot = firm_snapshot();
    let scope = VisibilityEngine::default()
        .firm_scope(&user(&snapshot, "2"), &snapshot)
        .unwrap();

    assert_eq!(scope.active_case_count(), 1);
    assert_eq!(scope.closed_case_count(), 0);
    assert_eq!(ids_of(&scope.pending_members(), |u| u.id.as_str()), vec!["9"]);
}

#[test]
fn non_admins_get_no_firm_scope() {
    let snapshot = firm_snapshot();
    let engine = VisibilityEngine::default();
    for id in ["1", "3", "4", "6"] {
        assert!(engine.firm_scope(&user(&snapshot, id), &snapshot).is_none(), "user {id}");
    }
}
