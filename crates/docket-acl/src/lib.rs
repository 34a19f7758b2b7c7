#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # docket-acl
//!
//! Access control for Docket case data:
//! - Role-based filtering of cases, tasks, milestones, and documents
//! - Case edit authorization
//! - The client portal's active case
//! - Request-boundary checks (logged out, unapproved accounts)
//! - Case, client, and firm projections

pub mod config;
pub mod enforcement;
pub mod error;
pub mod firm;
pub mod policy;
mod proptests;
pub mod scope;

pub use config::{AclConfig, CaseOrder, ClientTaskScope, VisibilityConfig};
pub use enforcement::{DashboardKind, authorize, is_firm_admin, principal_firm};
pub use error::{Error, Result};
pub use firm::FirmScope;
pub use policy::{DerivedView, VisibilityEngine, VisibleSet};
pub use scope::{CaseScope, ClientOverview};

impl From<AclConfig> for VisibilityEngine {
    fn from(config: AclConfig) -> Self {
        VisibilityEngine::new(config.visibility)
    }
}
