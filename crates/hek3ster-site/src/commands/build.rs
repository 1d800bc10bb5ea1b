//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use hek3ster_static::StaticBuilder;

use super::config::SiteConfig;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    minify: Option<bool>,
) -> Result<()> {
    tracing::info!("Building landing page...");

    let config = SiteConfig::load(config_path)?.build_config(output, minify);

    let result = StaticBuilder::new(config).build().await?;

    if !result.lint_issues.is_empty() {
        tracing::warn!(
            "{} content issue(s) found, run 'hek3ster-site check' for details",
            result.lint_issues.len()
        );
    }

    tracing::info!(
        "Built {} sections in {}ms",
        result.sections,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn output_flag_overrides_config() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        let out = temp.path().join("public");
        std::fs::write(&config_path, "[site]\noutput = \"elsewhere\"\n").unwrap();

        run(&config_path, Some(out.clone()), Some(false)).await.unwrap();

        assert!(out.join("index.html").exists());
        assert!(!temp.path().join("elsewhere").exists());
    }
}
