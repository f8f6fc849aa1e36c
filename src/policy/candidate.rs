use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;

/// Fully-qualified identity of one dependency candidate, rendered as the
/// `group:module:version` coordinate the whitelist matchers operate on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    group: Box<str>,
    module: Box<str>,
    version: Box<str>,
}

impl Candidate {
    #[must_use]
    pub fn new(group: &str, module: &str, version: &str) -> Self {
        Self {
            group: Box::from(group),
            module: Box::from(module),
            version: Box::from(version),
        }
    }

    /// Parse a `group:module:version` coordinate string.
    ///
    /// The version component may be empty; group and module may not.
    pub fn parse(coordinate: &str) -> Result<Self> {
        let mut parts = coordinate.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(module), Some(version)) if !group.is_empty() && !module.is_empty() => {
                Ok(Self::new(group, module, version))
            }
            _ => bail!("invalid coordinate (expected group:module:version): {coordinate}"),
        }
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The full coordinate string.
    #[must_use]
    pub fn coordinate(&self) -> String {
        self.to_string()
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_rendering() {
        let candidate = Candidate::new("com.example", "widget", "1.0");
        assert_eq!(candidate.coordinate(), "com.example:widget:1.0");
        assert_eq!(candidate.to_string(), "com.example:widget:1.0");
    }

    #[test]
    fn test_parse_round_trip() {
        let candidate = Candidate::parse("com.example:widget:1.0-SNAPSHOT").unwrap();
        assert_eq!(candidate.group(), "com.example");
        assert_eq!(candidate.module(), "widget");
        assert_eq!(candidate.version(), "1.0-SNAPSHOT");
    }

    #[test]
    fn test_parse_allows_empty_version() {
        let candidate = Candidate::parse("g:m:").unwrap();
        assert_eq!(candidate.version(), "");
        assert_eq!(candidate.coordinate(), "g:m:");
    }

    #[test]
    fn test_parse_keeps_colons_in_version() {
        let candidate = Candidate::parse("g:m:1:2").unwrap();
        assert_eq!(candidate.version(), "1:2");
    }

    #[test]
    fn test_parse_rejects_malformed_coordinates() {
        let _ = Candidate::parse("").unwrap_err();
        let _ = Candidate::parse("g").unwrap_err();
        let _ = Candidate::parse("g:m").unwrap_err();
        let _ = Candidate::parse(":m:1").unwrap_err();
        let _ = Candidate::parse("g::1").unwrap_err();
    }
}
