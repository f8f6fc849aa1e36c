//! depgate crate
//!
//! Policy layer for dependency resolution. The host build orchestration runtime
//! constructs an [`policy::AcceptancePolicy`] per module of the build tree from a
//! [`config::Config`] and consults it once per candidate version surfaced during
//! dependency graph resolution.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod config;

pub mod policy;

pub mod resolve;

pub use crate::policy::{AcceptancePolicy, Candidate, Verdict, Whitelist};
pub use crate::resolve::{ResolutionHost, resolve_and_lock};
