//! User roles.
//!
//! Every principal carries exactly one [`Role`]. The role is a closed
//! discriminant: visibility rules match on it, they never combine roles.
//!
//! Role strings that do not name a known role are preserved in
//! [`Role::Unrecognized`] rather than rejected, so that data from newer or
//! misconfigured sources still loads. Such principals are granted nothing.
//! The payload is an [`UnknownRole`], which can only hold a string outside
//! the known set, so an unrecognized role never reloads as a real one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The single role held by a principal.
///
/// Serialized as the kebab-case strings used by the case-management data
/// (`"lawyer"`, `"firm-admin"`, `"system-admin"`, ...).
///
/// # Example
///
/// ```
/// use docket_core::Role;
///
/// assert_eq!(Role::from("firm-admin"), Role::FirmAdmin);
/// assert!(Role::from("paralegal").is_unrecognized());
/// assert_eq!(Role::FirmAdmin.display_name(), "Firm Admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Attorney who owns the cases assigned to them.
    Lawyer,
    /// Intern with shared access to the cases they support.
    Intern,
    /// Client of the firm; sees only their own case.
    Client,
    /// Administrator of a law firm.
    FirmAdmin,
    /// Application administrator with unrestricted case access.
    Admin,
    /// Platform operator; manages users and firms, not case data.
    SystemAdmin,
    /// Any role string this crate does not know.
    Unrecognized(UnknownRole),
}

/// A role string outside the known set.
///
/// Only [`Role::from`] builds one, and only for strings that do not name a
/// known role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownRole(String);

impl UnknownRole {
    /// Returns the raw role string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Role {
    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lawyer => "lawyer",
            Self::Intern => "intern",
            Self::Client => "client",
            Self::FirmAdmin => "firm-admin",
            Self::Admin => "admin",
            Self::SystemAdmin => "system-admin",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Human-readable role name for account screens.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Lawyer => "Lawyer",
            Self::Intern => "Intern",
            Self::Client => "Client",
            Self::FirmAdmin => "Firm Admin",
            Self::Admin => "Admin",
            Self::SystemAdmin => "System Admin",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Returns `true` for roles with unrestricted access to case data.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Admin | Self::FirmAdmin)
    }

    /// Returns `true` for roles that can be assigned as a case's lawyer.
    pub fn is_attorney(&self) -> bool {
        matches!(self, Self::Lawyer | Self::FirmAdmin)
    }

    /// Returns `true` if the role string was not recognized.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "lawyer" => Self::Lawyer,
            "intern" => Self::Intern,
            "client" => Self::Client,
            "firm-admin" => Self::FirmAdmin,
            "admin" => Self::Admin,
            "system-admin" => Self::SystemAdmin,
            other => Self::Unrecognized(UnknownRole(other.to_string())),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from(s.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unrecognized(raw) => raw.0,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
