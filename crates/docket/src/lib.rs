//! Docket case dashboard access control, umbrella crate.
//!
//! This crate re-exports all Docket components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use docket_core as core;

#[cfg(feature = "acl")]
pub use docket_acl as acl;
