use crate::Result;
use crate::resolve::{ResolutionHost, SelectionRule};
use ohno::bail;

/// Resolve every resolvable dependency configuration of every module in the
/// build tree, fanning `rule` out across all surfaced candidates, so the
/// host can persist fresh lock state afterwards.
///
/// `write_locks` reflects the host's `--write-locks` command line flag. When
/// the flag is absent the task fails before any resolution work happens;
/// resolving without it would leave the lock output partial and
/// inconsistent.
pub fn resolve_and_lock(host: &mut dyn ResolutionHost, write_locks: bool, rule: SelectionRule<'_>) -> Result<()> {
    if !write_locks {
        bail!("command line flag '--write-locks' must be present");
    }

    for module in host.modules() {
        for configuration in host.configurations(&module) {
            log::debug!("resolving {module}:{configuration}");
            host.resolve(&module, &configuration, rule)?;
        }
    }

    Ok(())
}
