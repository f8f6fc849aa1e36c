use crate::Result;
use crate::policy::{Candidate, Verdict};

/// The capability the host invokes during graph resolution: one stateless
/// function from candidate to verdict, safe to call from any worker thread.
pub type SelectionRule<'a> = &'a (dyn Fn(&Candidate) -> Verdict + Sync);

/// Interface to the host build orchestration runtime.
///
/// The host knows the modules of the build tree, their resolvable dependency
/// configurations, and how to construct the dependency graph for one
/// configuration. While resolving it consults the supplied [`SelectionRule`]
/// once per candidate version and maps the verdict onto its own
/// accept/reject mechanism, surfacing rejection reasons as resolution
/// failure explanations.
pub trait ResolutionHost {
    /// Module paths of the build tree, root first.
    fn modules(&self) -> Vec<String>;

    /// Resolvable dependency configurations of one module.
    fn configurations(&self, module: &str) -> Vec<String>;

    /// Resolve one dependency configuration, invoking `rule` for every
    /// candidate version surfaced during graph construction.
    fn resolve(&mut self, module: &str, configuration: &str, rule: SelectionRule<'_>) -> Result<()>;
}
