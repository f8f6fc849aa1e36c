use crate::Result;
use crate::config::{EncodingSetting, LockMode};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Per-build-tree settings, read once at configuration time.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Source file encoding propagated to the host's compile and doc tasks.
    /// The literals `none` and `default` disable propagation; absent means
    /// the built-in default (UTF-8).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    #[serde(default)]
    pub locking: LockingConfig,

    #[serde(default)]
    pub resolution: ResolutionConfig,
}

/// Dependency locking settings. Locking itself is performed by the host;
/// these values gate whether the policy and lock task are installed at all.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LockingConfig {
    /// Whether dependency locking is enabled for the build tree
    #[serde(default)]
    pub enabled: bool,

    /// Lock mode forwarded to the host runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<LockMode>,
}

/// Settings consumed by the acceptance policy.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResolutionConfig {
    /// Reject candidate versions that look like pre-releases
    #[serde(default)]
    pub reject_pre_releases: bool,

    /// Glob expressions exempting matching coordinates from pre-release
    /// rejection, evaluated in order
    #[serde(default)]
    pub whitelist: Vec<String>,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(root: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading depgate configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                root.join("depgate.toml"),
                root.join("depgate.yml"),
                root.join("depgate.yaml"),
                root.join("depgate.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading depgate configuration from {path}")),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        log::debug!("loading configuration from {final_path}");

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => toml::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?,
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Write the embedded commented default configuration.
    ///
    /// Comments survive only for TOML output; other formats go through plain
    /// serialization.
    pub fn save_default_with_comments(output_path: &Utf8Path) -> Result<()> {
        if output_path.extension() == Some("toml") {
            fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
            return Ok(());
        }

        let config: Self = toml::from_str(DEFAULT_CONFIG_TOML).into_app_err("parsing embedded default configuration")?;
        config.save(output_path)
    }

    /// The decoded source-encoding setting.
    #[must_use]
    pub fn encoding_setting(&self) -> EncodingSetting {
        EncodingSetting::decode(self.encoding.as_deref())
    }

    fn validate(&self, warnings: &mut Vec<String>) {
        for pattern in &self.resolution.whitelist {
            // A coordinate always carries at least two separators and the
            // wildcard never crosses one, so such a pattern is dead weight.
            if pattern.chars().filter(|c| *c == ':').count() < 2 {
                warnings.push(format!(
                    "whitelist pattern '{pattern}' has fewer than two ':' separators and can never match a group:module:version coordinate"
                ));
            }
        }

        if !self.resolution.whitelist.is_empty() && !self.resolution.reject_pre_releases {
            warnings.push("resolution.whitelist has no effect unless resolution.reject_pre_releases is enabled".to_string());
        }

        if self.locking.mode.is_some() && !self.locking.enabled {
            warnings.push("locking.mode has no effect unless locking.enabled is set".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let config = Config::default();
        assert!(!config.resolution.reject_pre_releases);
        assert!(config.resolution.whitelist.is_empty());
        assert!(!config.locking.enabled);
        assert!(config.locking.mode.is_none());
        assert_eq!(config.encoding_setting(), EncodingSetting::Default);
    }

    #[test]
    fn test_parse_full_toml() {
        let config: Config = toml::from_str(
            r#"
            encoding = "ISO-8859-1"

            [locking]
            enabled = true
            mode = "strict"

            [resolution]
            reject_pre_releases = true
            whitelist = ["g:m:*", "g:*:1.0-SNAPSHOT"]
            "#,
        )
        .unwrap();

        assert_eq!(config.encoding_setting(), EncodingSetting::Custom("ISO-8859-1".to_string()));
        assert!(config.locking.enabled);
        assert_eq!(config.locking.mode, Some(LockMode::Strict));
        assert!(config.resolution.reject_pre_releases);
        assert_eq!(config.resolution.whitelist, vec!["g:m:*", "g:*:1.0-SNAPSHOT"]);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<Config, _> = toml::from_str("[resolution]\nwhitlist = []\n");
        let _ = result.unwrap_err();
    }

    #[test]
    fn test_missing_sections_normalize_to_defaults() {
        let config: Config = toml::from_str("[resolution]\nreject_pre_releases = true\n").unwrap();
        assert!(config.resolution.reject_pre_releases);
        assert!(config.resolution.whitelist.is_empty());
        assert!(!config.locking.enabled);
    }

    #[test]
    fn test_validation_flags_dead_whitelist_patterns() {
        let config: Config = toml::from_str(
            r#"
            [resolution]
            reject_pre_releases = true
            whitelist = ["*", "g:m:*"]
            "#,
        )
        .unwrap();

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains('*'));
        assert!(warnings[0].contains("never match"));
    }

    #[test]
    fn test_validation_flags_ineffective_whitelist() {
        let config: Config = toml::from_str("[resolution]\nwhitelist = [\"g:m:*\"]\n").unwrap();

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("reject_pre_releases"));
    }

    #[test]
    fn test_validation_flags_ineffective_lock_mode() {
        let config: Config = toml::from_str("[locking]\nmode = \"lenient\"\n").unwrap();

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("locking.mode"));
    }

    #[test]
    fn test_embedded_default_config_parses_clean() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        assert!(warnings.is_empty(), "default configuration must not warn: {warnings:?}");
    }

    #[test]
    fn test_json_and_yaml_parse_equivalently() {
        let json: Config =
            serde_json::from_str(r#"{"resolution": {"reject_pre_releases": true, "whitelist": ["g:m:*"]}}"#).unwrap();
        let yaml: Config = serde_yaml::from_str("resolution:\n  reject_pre_releases: true\n  whitelist: [\"g:m:*\"]\n").unwrap();

        assert_eq!(json.resolution.reject_pre_releases, yaml.resolution.reject_pre_releases);
        assert_eq!(json.resolution.whitelist, yaml.resolution.whitelist);
    }
}
