//! Identifier types for principals, firms, and case entities.
//!
//! Identifiers are opaque strings assigned by whoever owns the canonical
//! collections. Membership checks throughout the engine compare these ids,
//! never whole entities.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a string.
            pub fn new<S: Into<String>>(id: S) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of an authenticated user (lawyer, intern, client, admin).
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_core::PrincipalId;
    ///
    /// let id = PrincipalId::new("2");
    /// assert_eq!(id.as_str(), "2");
    /// ```
    PrincipalId
);
string_id!(
    /// Identifier of a law firm.
    FirmId
);
string_id!(
    /// Identifier of a case.
    CaseId
);
string_id!(
    /// Identifier of a task.
    TaskId
);
string_id!(
    /// Identifier of a milestone.
    MilestoneId
);
string_id!(
    /// Identifier of an uploaded document.
    DocumentId
);
string_id!(
    /// Identifier of a timeline or pre-engagement event.
    EventId
);
string_id!(
    /// Identifier of a case note.
    NoteId
);
string_id!(
    /// Identifier of a billing entry or client invoice.
    InvoiceId
);
string_id!(
    /// Identifier of a client meeting request.
    RequestId
);
