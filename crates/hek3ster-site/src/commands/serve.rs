//! Preview a built landing page.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command.
pub async fn run(port: u16, dir: PathBuf) -> Result<()> {
    ensure_built(&dir)?;

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local = listener.local_addr().context("Failed to read bound address")?;

    let url = format!("http://{}/", local);
    tracing::info!("Previewing {} at {}", dir.display(), url);

    if let Err(e) = open::that(&url) {
        tracing::debug!("Could not open browser: {}", e);
    }

    axum::serve(listener, app(&dir)).await?;

    Ok(())
}

/// Static files from the build output; `/` resolves to `index.html`.
fn app(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
}

/// The directory must hold a finished build, not just exist.
fn ensure_built(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Directory not found: {}. Run 'hek3ster-site build' first.",
            dir.display()
        );
    }
    if !dir.join("index.html").is_file() {
        anyhow::bail!(
            "No index.html in {}. Run 'hek3ster-site build --output {}' first.",
            dir.display(),
            dir.display()
        );
    }
    Ok(())
}
