//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hek3ster_static::{BuildConfig, PageMeta};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    pub base_url: String,
    pub output: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let meta = PageMeta::default();
        Self {
            title: meta.title,
            description: meta.description,
            base_url: meta.base_url,
            output: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildSettings {
    pub minify: bool,
    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: true,
            styles: vec![],
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Builder settings, with command-line overrides applied.
    pub fn build_config(self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            minify: minify.unwrap_or(self.build.minify),
            base_url: self.site.base_url,
            title: self.site.title,
            description: self.site.description,
            styles: self.build.styles,
        }
    }
}

pub const DEFAULT_CONFIG: &str = r#"# hek3ster landing page

[site]
# Page title
title = "hek3ster - Secure k3s clusters on Hetzner Cloud"

# Meta description
description = ""

# Base URL (for deployment)
base_url = "/"

# Output directory for the built site
output = "dist"

[build]
# Minify the stylesheet
minify = true

# Extra stylesheets copied into assets/
styles = []
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let config = SiteConfig::load(&temp.path().join("site.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn default_file_matches_defaults() {
        let config: SiteConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\nbase_url = \"https://hek3ster.example/\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.site.base_url, "https://hek3ster.example/");
        assert_eq!(config.site.output, "dist");
        assert!(config.build.minify);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[build]\nminify = \"sometimes\"\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn flags_override_file_values() {
        let config = SiteConfig::default().build_config(Some(PathBuf::from("public")), Some(false));

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert!(!config.minify);
        assert_eq!(config.base_url, "/");
    }
}
