use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resume::{ExtractOptions, SectionPolicy};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = "folio.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resume: ResumeConfig,
    pub portfolio: PortfolioConfig,
    pub certificates: CertificatesConfig,
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub summary_limit: usize,
    pub skills_limit: usize,
    pub highlights_limit: usize,
    pub empty_header: SectionPolicy,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        let limits = ExtractOptions::default();
        Self {
            source: PathBuf::from("src/document/resume.pdf"),
            output: PathBuf::from("public/assets/resume.json"),
            summary_limit: limits.summary_limit,
            skills_limit: limits.skills_limit,
            highlights_limit: limits.highlights_limit,
            empty_header: limits.section_policy,
        }
    }
}

impl ResumeConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            summary_limit: self.summary_limit,
            skills_limit: self.skills_limit,
            highlights_limit: self.highlights_limit,
            section_policy: self.empty_header,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub public_prefix: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src/document/certificate/portfolio.docx"),
            output_dir: PathBuf::from("public/assets/portfolio"),
            public_prefix: "/assets/portfolio".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificatesConfig {
    pub dir: PathBuf,
    pub exclude: Vec<String>,
}

impl Default for CertificatesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src/document/certificate"),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub dir: PathBuf,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src/document/product"),
        }
    }
}

impl Config {
    /// Get the per-user configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("folio");
        Ok(config_dir)
    }

    /// Get the per-user configuration file path
    pub fn user_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Find the configuration file to use, if any.
    ///
    /// An explicit path must exist. Otherwise `./folio.toml` wins over the
    /// per-user file.
    pub fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Configuration file not found at {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(LOCAL_CONFIG_NAME);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(Self::user_config_path().ok().filter(|p| p.exists()))
    }

    /// Load configuration, falling back to built-in defaults when no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit)? {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        config.expand_env_vars();
        tracing::debug!(path = %path.display(), "loaded configuration");

        Ok(config)
    }

    /// Expand environment variables in configured paths
    fn expand_env_vars(&mut self) {
        expand_path(&mut self.resume.source);
        expand_path(&mut self.resume.output);
        expand_path(&mut self.portfolio.source);
        expand_path(&mut self.portfolio.output_dir);
        expand_path(&mut self.certificates.dir);
        expand_path(&mut self.gallery.dir);
    }

    /// File stems the certificate scan skips: the configured list plus the
    /// portfolio document itself.
    pub fn certificate_excludes(&self) -> Vec<String> {
        let mut exclude = self.certificates.exclude.clone();
        if let Some(stem) = self.portfolio.source.file_stem() {
            exclude.push(stem.to_string_lossy().to_string());
        }
        exclude
    }
}

fn expand_path(path: &mut PathBuf) {
    if let Some(raw) = path.to_str() {
        let expanded: Vec<String> = raw.split('/').map(expand_env_var).collect();
        *path = PathBuf::from(expanded.join("/"));
    }
}

/// Expand environment variable references like ${VAR_NAME}
fn expand_env_var(value: &str) -> String {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).unwrap_or_default()
    } else if let Some(var_name) = value.strip_prefix('$') {
        std::env::var(var_name).unwrap_or_default()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_var_braces() {
        // SAFETY: test is single-threaded
        unsafe { std::env::set_var("FOLIO_TEST_VAR_A", "value_a") };
        assert_eq!(expand_env_var("${FOLIO_TEST_VAR_A}"), "value_a");
        unsafe { std::env::remove_var("FOLIO_TEST_VAR_A") };
    }

    #[test]
    fn test_expand_env_var_literal() {
        assert_eq!(expand_env_var("literal_value"), "literal_value");
        assert_eq!(expand_env_var(""), "");
    }

    #[test]
    fn test_expand_env_var_missing_returns_empty() {
        assert_eq!(expand_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), "");
    }

    #[test]
    fn test_expand_path_segments() {
        unsafe { std::env::set_var("FOLIO_TEST_ROOT", "/srv/site") };
        let mut path = PathBuf::from("$FOLIO_TEST_ROOT/public/assets/resume.json");
        expand_path(&mut path);
        assert_eq!(path, PathBuf::from("/srv/site/public/assets/resume.json"));
        unsafe { std::env::remove_var("FOLIO_TEST_ROOT") };
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [resume]
            source = "docs/cv.pdf"
            output = "out/resume.json"
            skills_limit = 10
            empty_header = "keep"

            [portfolio]
            public_prefix = "/static/portfolio"

            [certificates]
            exclude = ["draft"]
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.resume.source, PathBuf::from("docs/cv.pdf"));
        assert_eq!(config.resume.skills_limit, 10);
        assert_eq!(config.resume.summary_limit, 6);
        assert_eq!(config.resume.empty_header, SectionPolicy::Keep);
        assert_eq!(config.portfolio.public_prefix, "/static/portfolio");
        assert_eq!(config.portfolio.output_dir, PathBuf::from("public/assets/portfolio"));
        assert_eq!(config.certificates.exclude, vec!["draft"]);
    }

    #[test]
    fn test_config_default_values() {
        let config: Config = toml::from_str("").unwrap();
        let options = config.resume.extract_options();
        assert_eq!(options, ExtractOptions::default());
        assert_eq!(config.gallery.dir, PathBuf::from("src/document/product"));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let result: Result<Config, _> = toml::from_str("[resume]\nempty_header = \"merge\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_certificate_excludes_portfolio_document() {
        let config = Config::default();
        assert_eq!(config.certificate_excludes(), vec!["portfolio"]);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("folio.toml"))).is_err());
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let mut config = Config::default();
        config.resume.empty_header = SectionPolicy::Keep;
        config.certificates.exclude = vec!["old".into()];

        let serialized = toml::to_string_pretty(&config).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, serialized).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.resume.empty_header, SectionPolicy::Keep);
        assert_eq!(loaded.certificates.exclude, vec!["old"]);
    }
}
