use crate::policy::glob::{self, CompiledMatcher};

/// Ordered set of compiled whitelist matchers.
///
/// Membership is an OR over all matchers, short-circuiting on the first hit;
/// order only matters for deterministic diagnostics. An empty whitelist
/// contains nothing.
#[derive(Debug, Default)]
pub struct Whitelist {
    matchers: Vec<CompiledMatcher>,
}

impl Whitelist {
    /// Compile each pattern independently, preserving the given order.
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers: Vec<_> = patterns.into_iter().map(|p| glob::compile(p.as_ref())).collect();
        log::debug!("compiled {} whitelist pattern(s)", matchers.len());
        Self { matchers }
    }

    /// Returns `true` iff at least one pattern matches the full coordinate.
    #[must_use]
    pub fn contains(&self, coordinate: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(coordinate))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Source expressions in configuration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(CompiledMatcher::source)
    }
}
