//! Dependency acceptance policy engine
//!
//! This module decides, per candidate version of each external dependency,
//! whether that version may be selected during resolution. A candidate is
//! accepted unless pre-release rejection is enabled, the version classifies
//! as a pre-release, and no whitelist pattern matches the candidate's
//! coordinate.
//!
//! All decision-time state is immutable: a policy is built once per module at
//! configuration time and may then be consulted from any number of resolution
//! worker threads without locking.

mod candidate;
pub mod glob;
mod version;
mod whitelist;

pub use candidate::Candidate;
pub use version::looks_released;
pub use whitelist::Whitelist;

use crate::config::ResolutionConfig;

/// Reason attached to every rejected candidate. Stable text that the host
/// surfaces as the resolution failure explanation.
pub const PRE_RELEASE_REASON: &str = "looks like a pre-release";

/// Outcome of the acceptance policy for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate version may be selected.
    Accepted,

    /// The candidate version must not be selected.
    Rejected {
        /// Human-readable explanation for the host to surface.
        reason: String,
    },
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, `None` for accepted candidates.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

/// Per-module acceptance policy: the pre-release flag plus the compiled
/// whitelist, combined into one accept/reject decision per candidate.
#[derive(Debug, Default)]
pub struct AcceptancePolicy {
    reject_pre_releases: bool,
    whitelist: Whitelist,
}

impl AcceptancePolicy {
    #[must_use]
    pub const fn new(reject_pre_releases: bool, whitelist: Whitelist) -> Self {
        Self {
            reject_pre_releases,
            whitelist,
        }
    }

    /// Build the policy from resolution settings, compiling the whitelist.
    #[must_use]
    pub fn from_settings(settings: &ResolutionConfig) -> Self {
        Self::new(settings.reject_pre_releases, Whitelist::new(&settings.whitelist))
    }

    /// Decide whether one candidate version may be selected.
    ///
    /// Pure and read-only; safe to invoke concurrently for different
    /// candidates.
    #[must_use]
    pub fn decide(&self, candidate: &Candidate) -> Verdict {
        if !self.reject_pre_releases || looks_released(candidate.version()) {
            return Verdict::Accepted;
        }

        if self.whitelist.contains(&candidate.coordinate()) {
            return Verdict::Accepted;
        }

        Verdict::Rejected {
            reason: PRE_RELEASE_REASON.to_string(),
        }
    }

    /// The single capability the host's resolution machinery invokes, once
    /// per candidate version surfaced during graph construction.
    pub fn selection_rule(&self) -> impl Fn(&Candidate) -> Verdict + Send + Sync + '_ {
        move |candidate| self.decide(candidate)
    }
}
