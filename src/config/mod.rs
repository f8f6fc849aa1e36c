//! Configuration for the depgate policy layer
//!
//! Settings are read once per build tree at configuration time into an
//! immutable [`Config`] value; the policy core only ever sees the resulting
//! [`ResolutionConfig`]. Encoding and lock-mode values are decoded here, at
//! the configuration boundary, and handed to the host verbatim.

mod config;
mod encoding;
mod lock_mode;

pub use config::{Config, DEFAULT_CONFIG_TOML, LockingConfig, ResolutionConfig};
pub use encoding::EncodingSetting;
pub use lock_mode::LockMode;
