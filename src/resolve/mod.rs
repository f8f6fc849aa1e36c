//! Boundary to the host's dependency-resolution machinery
//!
//! The host owns graph construction, artifact fetching, and lock
//! persistence. This module defines the trait the host implements
//! ([`ResolutionHost`]) and the lock task ([`resolve_and_lock`]) that drives
//! resolution of every configuration in the build tree so the host can
//! persist fresh lock state.

mod host;
mod lock;

pub use host::{ResolutionHost, SelectionRule};
pub use lock::resolve_and_lock;
