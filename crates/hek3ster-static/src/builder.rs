//! Static site builder.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tokio::fs;

use hek3ster_catalog::{Catalog, LintIssue};

use crate::assets::AssetPipeline;
use crate::page::{self, PageError, PageMeta, NAVIGATION};
use crate::sections::NavLink;
use crate::templates::TemplateEngine;

/// Configuration for building the landing page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Page title
    pub title: String,

    /// Meta description
    pub description: String,

    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let meta = PageMeta::default();
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: meta.base_url,
            title: meta.title,
            description: meta.description,
            styles: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of sections rendered
    pub sections: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,

    /// Content problems found in the catalog
    pub lint_issues: Vec<LintIssue>,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Static site builder.
pub struct StaticBuilder<'a> {
    config: BuildConfig,
    catalog: Catalog<'a>,
    nav: &'a [NavLink],
    templates: TemplateEngine,
}

impl StaticBuilder<'static> {
    /// Create a builder for the built-in catalog.
    pub fn new(config: BuildConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin(), NAVIGATION)
    }
}

impl<'a> StaticBuilder<'a> {
    /// Create a builder for a custom catalog and navigation.
    pub fn with_catalog(config: BuildConfig, catalog: Catalog<'a>, nav: &'a [NavLink]) -> Self {
        Self {
            config,
            catalog,
            nav,
            templates: TemplateEngine::new(),
        }
    }

    /// Render the page without writing anything.
    pub fn render(&self) -> Result<(String, usize), BuildError> {
        let page = page::compose(&self.templates, &self.catalog, self.nav, &self.config.base_url)?;
        let html = page.render_document(&self.templates, &self.page_meta())?;

        page::verify_document_anchors(self.nav, &html).map_err(PageError::Anchors)?;

        Ok((html, page.sections.len()))
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let lint_issues = self.catalog.lint();
        for issue in &lint_issues {
            tracing::warn!("{}", issue);
        }

        let (html, sections) = self.render()?;

        let out = &self.config.output_dir;
        create_dir(out).await?;
        write(&out.join("index.html"), html).await?;
        tracing::debug!("Rendered {} sections", sections);

        self.generate_assets().await?;
        self.generate_sitemap().await?;

        let duration = start.elapsed();

        Ok(BuildResult {
            sections,
            duration_ms: duration.as_millis() as u64,
            output_dir: out.clone(),
            lint_issues,
        })
    }

    fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            base_url: self.config.base_url.clone(),
            styles: self
                .config
                .styles
                .iter()
                .map(|s| format!("{}assets/{}", self.config.base_url, style_filename(s)))
                .collect(),
        }
    }

    /// Generate static assets.
    async fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        create_dir(&assets_dir).await?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Skipping CSS minification: {}", e);
                css
            })
        } else {
            css
        };
        write(&assets_dir.join("main.css"), css).await?;

        write(&assets_dir.join("main.js"), AssetPipeline::generate_js()).await?;

        // Copy configured stylesheets
        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if !source_path.exists() {
                tracing::warn!("Stylesheet not found: {}", style_path);
                continue;
            }

            let content = fs::read_to_string(&source_path)
                .await
                .map_err(|source| BuildError::ReadError {
                    path: source_path.clone(),
                    source,
                })?;
            write(&assets_dir.join(style_filename(style_path)), content).await?;
            tracing::info!("Copied stylesheet from {}", style_path);
        }

        Ok(())
    }

    /// Generate sitemap and robots.txt.
    async fn generate_sitemap(&self) -> Result<(), BuildError> {
        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}</loc>
  </url>
</urlset>"#,
            self.config.base_url
        );
        write(&self.config.output_dir.join("sitemap.xml"), sitemap).await?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        write(&self.config.output_dir.join("robots.txt"), robots).await?;

        Ok(())
    }
}

fn style_filename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("style.css")
}

async fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| BuildError::WriteError {
            path: path.to_path_buf(),
            source,
        })
}

async fn write(path: &Path, contents: String) -> Result<(), BuildError> {
    fs::write(path, contents)
        .await
        .map_err(|source| BuildError::WriteError {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::page::{AnchorError, SectionKind};

    fn config_for(out: &Path) -> BuildConfig {
        BuildConfig {
            output_dir: out.to_path_buf(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_landing_page() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let result = StaticBuilder::new(config_for(&out)).build().await.unwrap();

        assert_eq!(result.sections, SectionKind::ORDER.len());
        assert!(result.lint_issues.is_empty());
        assert!(out.join("index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
        assert!(out.join("sitemap.xml").exists());
        assert!(out.join("robots.txt").exists());

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("$158"));
        assert!(html.contains(r#"id="docs""#));
    }

    #[tokio::test]
    async fn minified_css_is_smaller() {
        let temp = tempdir().unwrap();
        let minified = temp.path().join("min");
        let plain = temp.path().join("plain");

        StaticBuilder::new(config_for(&minified)).build().await.unwrap();
        StaticBuilder::new(BuildConfig {
            minify: false,
            ..config_for(&plain)
        })
        .build()
        .await
        .unwrap();

        let min_css = std::fs::read_to_string(minified.join("assets/main.css")).unwrap();
        let plain_css = std::fs::read_to_string(plain.join("assets/main.css")).unwrap();
        assert!(min_css.len() < plain_css.len());
    }

    #[tokio::test]
    async fn copies_configured_stylesheets() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        let theme = temp.path().join("theme.css");
        std::fs::write(&theme, ".hero { color: red; }").unwrap();

        let config = BuildConfig {
            styles: vec![
                theme.display().to_string(),
                temp.path().join("missing.css").display().to_string(),
            ],
            ..config_for(&out)
        };
        StaticBuilder::new(config).build().await.unwrap();

        let copied = std::fs::read_to_string(out.join("assets/theme.css")).unwrap();
        assert_eq!(copied, ".hero { color: red; }");

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("theme.css"));
        assert!(!out.join("assets/missing.css").exists());
    }

    #[tokio::test]
    async fn sitemap_uses_base_url() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        StaticBuilder::new(BuildConfig {
            base_url: "https://hek3ster.example/".to_string(),
            ..config_for(&out)
        })
        .build()
        .await
        .unwrap();

        let sitemap = std::fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://hek3ster.example/</loc>"));

        let robots = std::fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.ends_with("Sitemap: https://hek3ster.example/sitemap.xml"));
    }

    #[tokio::test]
    async fn broken_navigation_writes_nothing() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        let nav = [NavLink {
            label: "Blog",
            anchor: "blog",
        }];

        let builder = StaticBuilder::with_catalog(config_for(&out), Catalog::builtin(), &nav);
        let err = builder.build().await.unwrap_err();

        match err {
            BuildError::Page(PageError::Anchors(errors)) => assert_eq!(
                errors,
                vec![AnchorError::Missing {
                    label: "Blog",
                    anchor: "blog"
                }]
            ),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn reports_lint_issues_without_failing() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        let plans = [
            hek3ster_catalog::content::PRICING_PLANS[0],
            hek3ster_catalog::PricingPlan {
                highlighted: true,
                ..hek3ster_catalog::content::PRICING_PLANS[1]
            },
        ];
        let catalog = Catalog {
            pricing_plans: &plans,
            ..Catalog::builtin()
        };

        let result = StaticBuilder::with_catalog(config_for(&out), catalog, NAVIGATION)
            .build()
            .await
            .unwrap();

        assert_eq!(result.lint_issues.len(), 1);
        assert!(out.join("index.html").exists());
    }

    #[test]
    fn render_is_deterministic() {
        let builder = StaticBuilder::new(BuildConfig::default());
        let (first, _) = builder.render().unwrap();
        let (second, _) = builder.render().unwrap();
        assert_eq!(first, second);
    }
}
