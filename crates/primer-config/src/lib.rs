//! Configuration management for the primer.
//!
//! Parses `primer.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `page.title`
//! - `page.lang`
//! - `page.stylesheet`
//! - `page.byline.text`
//! - `page.byline.url`
//! - `output.path`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override page title.
    pub title: Option<String>,
    /// Override output file.
    pub output_path: Option<PathBuf>,
    /// Override GFM flag.
    pub gfm: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "primer.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page header configuration.
    pub page: PageConfig,
    /// Markdown rendering configuration.
    pub render: RenderConfig,
    /// Output configuration (path is a relative string from TOML).
    output: OutputConfigRaw,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Page header configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page title, shown in `<title>` and the header.
    pub title: String,
    /// Document language.
    pub lang: String,
    /// Optional stylesheet href.
    pub stylesheet: Option<String>,
    /// Optional attribution link under the title.
    pub byline: Option<BylineConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Persistent Collections Tutorial and Sandbox".to_owned(),
            lang: "en".to_owned(),
            stylesheet: None,
            byline: None,
        }
    }
}

/// Attribution link configuration.
#[derive(Debug, Deserialize)]
pub struct BylineConfig {
    /// Link text.
    pub text: String,
    /// Link target.
    pub url: String,
}

/// Markdown rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Enable GitHub Flavored Markdown extensions.
    pub gfm: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { gfm: true }
    }
}

/// Raw output configuration as parsed from TOML (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// File to write the page to. `None` means stdout.
    pub path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`page.title`").
        field: String,
        /// Error message (e.g., "${`PRIMER_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `primer.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.page.title.clone_from(title);
        }
        if let Some(path) = &settings.output_path {
            self.output_resolved.path = Some(path.clone());
        }
        if let Some(gfm) = settings.gfm {
            self.render.gfm = gfm;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.page.title, "page.title")?;
        require_non_empty(&self.page.lang, "page.lang")?;
        if let Some(byline) = &self.page.byline {
            require_non_empty(&byline.text, "page.byline.text")?;
            require_http_url(&byline.url, "page.byline.url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let env = expand::Expander::from_env();
        env.apply("page.title", &mut self.page.title)?;
        env.apply("page.lang", &mut self.page.lang)?;
        env.apply_opt("page.stylesheet", &mut self.page.stylesheet)?;
        if let Some(byline) = &mut self.page.byline {
            env.apply("page.byline.text", &mut byline.text)?;
            env.apply("page.byline.url", &mut byline.url)?;
        }
        env.apply_opt("output.path", &mut self.output.path)?;
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            path: self.output.path.as_deref().map(|p| config_dir.join(p)),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.page.title,
            "Persistent Collections Tutorial and Sandbox"
        );
        assert_eq!(config.page.lang, "en");
        assert!(config.page.byline.is_none());
        assert!(config.render.gfm);
        assert_eq!(config.output_resolved.path, None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.page.lang, "en");
        assert!(config.render.gfm);
    }

    #[test]
    fn test_parse_page_config() {
        let toml = r#"
[page]
title = "Immutable Tutorial and Sandbox"
stylesheet = "app.css"

[page.byline]
text = "untangled.io"
url = "http://untangled.io/"

[render]
gfm = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.page.title, "Immutable Tutorial and Sandbox");
        assert_eq!(config.page.lang, "en");
        assert_eq!(config.page.stylesheet.as_deref(), Some("app.css"));
        let byline = config.page.byline.as_ref().unwrap();
        assert_eq!(byline.text, "untangled.io");
        assert_eq!(byline.url, "http://untangled.io/");
        assert!(!config.render.gfm);
        config.validate().unwrap();
    }

    #[test]
    fn test_load_resolves_output_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primer.toml");
        std::fs::write(&path, "[output]\npath = \"dist/index.html\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(
            config.output_resolved.path,
            Some(dir.path().join("dist/index.html"))
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primer.toml");
        std::fs::write(&path, "[page\ntitle = ").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_byline_url_must_be_http() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primer.toml");
        std::fs::write(
            &path,
            "[page.byline]\ntext = \"me\"\nurl = \"ftp://example.com\"\n",
        )
        .unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("page.byline.url"));
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primer.toml");
        std::fs::write(
            &path,
            "[page]\ntitle = \"From file\"\n[output]\npath = \"a.html\"\n",
        )
        .unwrap();

        let settings = CliSettings {
            title: Some("From CLI".to_owned()),
            output_path: Some(PathBuf::from("/tmp/b.html")),
            gfm: Some(false),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.page.title, "From CLI");
        assert_eq!(
            config.output_resolved.path,
            Some(PathBuf::from("/tmp/b.html"))
        );
        assert!(!config.render.gfm);
    }

    #[test]
    fn test_empty_cli_title_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primer.toml");
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            title: Some("  ".to_owned()),
            ..CliSettings::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_sample_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, include_str!("../../../primer.toml")).unwrap();

        let config = Config::load(Some(&path), Some(&CliSettings::default())).unwrap();
        let byline = config.page.byline.as_ref().unwrap();
        assert_eq!(byline.text, "untangled.io");
        assert!(byline.url.starts_with("http://untangled.io/"));
        assert!(config.render.gfm);
        assert_eq!(config.output_resolved.path, None);
    }

    #[test]
    fn test_env_expansion_on_load() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PRIMER_TEST_LOAD_TITLE", "Expanded");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primer.toml");
        std::fs::write(&path, "[page]\ntitle = \"${PRIMER_TEST_LOAD_TITLE}\"\n").unwrap();
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.page.title, "Expanded");
        unsafe {
            std::env::remove_var("PRIMER_TEST_LOAD_TITLE");
        }
    }
}
