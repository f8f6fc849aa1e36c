//! Command-line interface for depgate
//!
//! The binary exposes the acceptance policy for ad-hoc and CI use: `check`
//! evaluates candidate coordinates against the configured policy, `init`
//! generates a default configuration file, `validate` checks a configuration
//! file, and `convert` translates one between formats. The policy itself is
//! consulted by the host build runtime through the library crate; nothing
//! here resolves dependency graphs.

mod check;
mod common;
mod convert;
mod init;
mod validate;

pub use check::{CheckArgs, check_candidates};
pub use convert::{ConvertArgs, convert_config};
pub use init::{InitArgs, init_config};
pub use validate::{ValidateArgs, validate_config};
