//! Classifies version strings as released or pre-release.

use regex::Regex;
use std::sync::LazyLock;

/// Full-string grammar of released versions: one or more digits, the
/// qualifiers `release`, `ga`, `final`, `sp`, and the separators `-`, `.`,
/// `_`, `+`. The vocabulary is fixed; matching is ASCII-case-insensitive.
static RELEASED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^([0-9]|release|ga|final|sp|[-._+])+$").expect("released-version grammar is a valid regex"));

/// Returns `true` when `version` denotes a released artifact.
///
/// Versions built entirely from digits and final-like qualifiers count as
/// released; any other alphabetic qualifier (`dev`, `snapshot`, `m`, `alpha`,
/// `rc`, ...) marks a snapshot, milestone, or other pre-release.
#[must_use]
pub fn looks_released(version: &str) -> bool {
    RELEASED_VERSION.is_match(&version.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_versions() {
        assert!(looks_released("1"));
        assert!(looks_released("1.0"));
        assert!(looks_released("0.9_+_1"));
        assert!(looks_released("1.0-RELEASE"));
        assert!(looks_released("1.0-ReLeAsE"));
        assert!(looks_released("GA"));
        assert!(looks_released("1.Final"));
        assert!(looks_released("2.2sp4"));
        assert!(looks_released("10.2.3"));
    }

    #[test]
    fn test_pre_release_versions() {
        assert!(!looks_released("1.0-SNAPSHOT"));
        assert!(!looks_released("1.0dev1"));
        assert!(!looks_released("5.1-M1"));
        assert!(!looks_released("x"));
        assert!(!looks_released("1.0-alpha"));
        assert!(!looks_released("2.0-rc1"));
        assert!(!looks_released("1.0-beta.2"));
    }

    #[test]
    fn test_empty_version_is_pre_release() {
        assert!(!looks_released(""));
    }

    #[test]
    fn test_match_must_cover_entire_string() {
        assert!(!looks_released("1.0 "));
        assert!(!looks_released(" 1.0"));
        assert!(!looks_released("1.0-SNAPSHOT-1"));
        assert!(!looks_released("final!"));
    }

    #[test]
    fn test_qualifiers_are_tokens_not_letters() {
        // Arbitrary rearrangements of the qualifier letters do not qualify.
        assert!(!looks_released("1.0-lease"));
        assert!(!looks_released("1.0-g"));
        assert!(!looks_released("1.0-s"));
        // Adjacent whole tokens are still a run of the grammar.
        assert!(looks_released("gaga"));
        assert!(looks_released("release-final"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        assert!(looks_released("FiNaL"));
        // U+017F LATIN SMALL LETTER LONG S folds to `s` only under Unicode
        // rules, which the classifier does not apply.
        assert!(!looks_released("2.2\u{17f}p4"));
    }
}
