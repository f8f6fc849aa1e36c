/// Source-encoding setting, decoded from its raw configured value.
///
/// The effective encoding is handed to the host for propagation to its
/// compile and doc-generation tasks; this crate only does the decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingSetting {
    /// Nothing configured; the built-in default applies.
    Default,

    /// Propagation explicitly disabled; the host leaves its tasks untouched.
    Disabled,

    /// A concrete encoding name to propagate.
    Custom(String),
}

impl EncodingSetting {
    /// Encoding used when nothing is configured.
    pub const DEFAULT_ENCODING: &'static str = "UTF-8";

    /// Decode the raw configured value.
    ///
    /// The literals `none` and `default` (ASCII-case-insensitive) are
    /// sentinels meaning "do not touch the host's tasks".
    #[must_use]
    pub fn decode(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Default,
            Some(s) if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("default") => Self::Disabled,
            Some(s) => Self::Custom(s.to_string()),
        }
    }

    /// Effective encoding to hand to the host, `None` when propagation is
    /// disabled.
    #[must_use]
    pub fn effective(&self) -> Option<&str> {
        match self {
            Self::Default => Some(Self::DEFAULT_ENCODING),
            Self::Disabled => None,
            Self::Custom(name) => Some(name),
        }
    }
}
