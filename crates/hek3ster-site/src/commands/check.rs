//! Verify the composed page without writing it.

use std::path::Path;

use anyhow::{Context, Result};
use hek3ster_catalog::Catalog;
use hek3ster_static::StaticBuilder;

use super::config::SiteConfig;

/// Run the check command.
///
/// Content issues are reported as warnings; broken navigation fails the check.
pub async fn run(config_path: &Path) -> Result<()> {
    let config = SiteConfig::load(config_path)?.build_config(None, None);

    let issues = Catalog::builtin().lint();
    for issue in &issues {
        tracing::warn!("{}", issue);
    }

    let (_, sections) = StaticBuilder::new(config)
        .render()
        .context("Page check failed")?;

    tracing::info!(
        "Composed {} sections, navigation anchors OK, {} content issue(s)",
        sections,
        issues.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builtin_page_passes() {
        let temp = tempdir().unwrap();
        run(&temp.path().join("site.toml")).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_config_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "not = [toml").unwrap();

        assert!(run(&path).await.is_err());
    }
}
