use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Dependency lock mode, forwarded verbatim to the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LockMode {
    /// The host's default behavior.
    Default,

    /// Resolution fails when the lock state is out of date.
    Strict,

    /// The lock state is used where it matches, refreshed where it does not.
    Lenient,
}
