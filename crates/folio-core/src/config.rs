// crates/folio-core/src/config.rs
// Site configuration parsed from folio.toml

use crate::error::{FolioError, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// GitHub allows at most 100 items per page
pub const MAX_PER_PAGE: u32 = 100;

/// Top-level config structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct FolioConfig {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
}

/// Profile service settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitHubConfig {
    /// Account whose stats are shown
    pub handle: String,
    pub api_base: String,
    /// Repositories fetched in the single page request (1..=100)
    pub per_page: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            handle: "SupaOhm".to_string(),
            api_base: "https://api.github.com".to_string(),
            per_page: MAX_PER_PAGE,
        }
    }
}

/// Damping fractions for the cursor-following glows
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    pub card_damping: f64,
    pub hero_damping: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            card_damping: 0.15,
            hero_damping: 0.1,
        }
    }
}

/// Hero typewriter timings, in milliseconds
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypewriterConfig {
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_ms: 80,
            deleting_ms: 50,
            pause_ms: 2000,
        }
    }
}

impl TypewriterConfig {
    pub fn typing(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub fn deleting(&self) -> Duration {
        Duration::from_millis(self.deleting_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl FolioConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, falling back to defaults if it is invalid
    pub fn parse_or_default(contents: &str) -> Self {
        match Self::from_toml_str(contents) {
            Ok(config) => {
                debug!(handle = %config.github.handle, "Loaded site config");
                config
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse site config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace the GitHub handle when an override is present and non-empty
    pub fn with_handle_override(mut self, handle: Option<&str>) -> Self {
        if let Some(handle) = handle.map(str::trim).filter(|h| !h.is_empty()) {
            debug!(handle, "GitHub handle overridden");
            self.github.handle = handle.to_string();
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.github.handle.trim().is_empty() {
            return Err(FolioError::Config("github.handle must not be empty".to_string()));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.github.per_page) {
            return Err(FolioError::Config(format!(
                "github.per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.github.per_page
            )));
        }
        for (name, value) in [
            ("motion.card_damping", self.motion.card_damping),
            ("motion.hero_damping", self.motion.hero_damping),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(FolioError::Config(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[github]
handle = "octocat"
per_page = 50

[motion]
card_damping = 0.2
"#;
        let config = FolioConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.github.handle, "octocat");
        assert_eq!(config.github.per_page, 50);
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.motion.card_damping, 0.2);
        assert_eq!(config.motion.hero_damping, 0.1);
        assert_eq!(config.typewriter, TypewriterConfig::default());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = FolioConfig::from_toml_str("").unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.github.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_rejects_oversized_page() {
        let err = FolioConfig::from_toml_str("[github]\nper_page = 250\n").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(err.to_string().contains("per_page"));
    }

    #[test]
    fn test_rejects_damping_out_of_range() {
        assert!(FolioConfig::from_toml_str("[motion]\ncard_damping = 0.0\n").is_err());
        assert!(FolioConfig::from_toml_str("[motion]\nhero_damping = 1.5\n").is_err());
        assert!(FolioConfig::from_toml_str("[motion]\nhero_damping = 1.0\n").is_ok());
    }

    #[test]
    fn test_parse_or_default_on_garbage() {
        let config = FolioConfig::parse_or_default("[github\nhandle = ");
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_handle_override() {
        let config = FolioConfig::default().with_handle_override(Some("  torvalds "));
        assert_eq!(config.github.handle, "torvalds");

        let config = FolioConfig::default().with_handle_override(Some("   "));
        assert_eq!(config.github.handle, "SupaOhm");

        let config = FolioConfig::default().with_handle_override(None);
        assert_eq!(config.github.handle, "SupaOhm");
    }

    #[test]
    fn test_typewriter_durations() {
        let tw = TypewriterConfig::default();
        assert_eq!(tw.typing(), Duration::from_millis(80));
        assert_eq!(tw.deleting(), Duration::from_millis(50));
        assert_eq!(tw.pause(), Duration::from_secs(2));
    }
}
