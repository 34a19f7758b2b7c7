//! Request-boundary checks: authentication, approval, and dashboard routing.

use crate::common::{firm_snapshot, user};
use docket_acl::{DashboardKind, Error, VisibilityEngine, authorize, is_firm_admin};

#[test]
fn approved_users_pass_authorization() {
    let snapshot = firm_snapshot();
    for id in ["1", "2", "3", "4", "6"] {
        let principal = user(&snapshot, id);
        let authorized = authorize(Some(&principal)).unwrap();
        assert_eq!(authorized.id, principal.id);
    }
}

#[test]
fn missing_principal_is_unauthenticated() {
    let err = authorize(None).unwrap_err();
    assert!(matches!(err, Error::Unauthenticated));
    assert!(err.is_access_denied());
}

#[test]
fn pending_user_is_refused() {
    let snapshot = firm_snapshot();
    let pending = user(&snapshot, "9");
    let err = authorize(Some(&pending)).unwrap_err();
    assert!(matches!(err, Error::NotApproved { ref principal, .. } if principal.as_str() == "9"));
    assert!(err.to_string().contains("pending"));
}

#[test]
fn dashboards_route_by_role() {
    let snapshot = firm_snapshot();
    let kind = |id: &str| DashboardKind::for_principal(&user(&snapshot, id), &snapshot.firms);

    assert_eq!(kind("1"), DashboardKind::SystemAdmin);
    assert_eq!(kind("2"), DashboardKind::FirmAdmin);
    assert_eq!(kind("3"), DashboardKind::Staff);
    assert_eq!(kind("4"), DashboardKind::Staff);
    assert_eq!(kind("6"), DashboardKind::Client);
    assert_eq!(kind("9"), DashboardKind::PendingApproval);
}

#[test]
fn only_data_dashboards_show_cases() {
    assert!(!DashboardKind::SystemAdmin.shows_case_data());
    assert!(!DashboardKind::PendingApproval.shows_case_data());
    assert!(DashboardKind::Client.shows_case_data());
    assert!(DashboardKind::Staff.shows_case_data());
}

#[test]
fn firm_admin_detection_uses_firm_record() {
    let snapshot = firm_snapshot();
    assert!(is_firm_admin(&user(&snapshot, "2"), &snapshot.firms));
    assert!(!is_firm_admin(&user(&snapshot, "3"), &snapshot.firms));
    assert!(!is_firm_admin(&user(&snapshot, "6"), &snapshot.firms));
}

#[test]
fn authorized_principal_flows_into_filtering() {
    let snapshot = firm_snapshot();
    let acme = user(&snapshot, "6");
    let principal = authorize(Some(&acme)).unwrap();
    let view = VisibilityEngine::default().view(principal, &snapshot);
    assert_eq!(view.cases.len(), 1);
}
