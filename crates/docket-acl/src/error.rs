//! Error types for docket-acl.

use docket_core::{ApprovalStatus, PrincipalId};
use thiserror::Error;

/// Result type alias for docket-acl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in docket-acl.
///
/// Filtering never fails; these errors come from the request boundary and
/// from configuration loading.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from docket-core
    #[error("Core error: {0}")]
    Core(#[from] docket_core::Error),

    /// No principal was supplied (logged out).
    #[error("no authenticated principal")]
    Unauthenticated,

    /// The principal's account is not approved.
    #[error("principal '{principal}' is not approved (status: {status})")]
    NotApproved {
        /// The principal that was refused.
        principal: PrincipalId,
        /// Its approval status.
        status: ApprovalStatus,
    },
}

impl Error {
    /// Whether this error denies access (vs. a configuration failure).
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::Unauthenticated | Error::NotApproved { .. })
    }
}
