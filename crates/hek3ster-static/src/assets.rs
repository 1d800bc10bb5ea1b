//! Asset pipeline for the stylesheet and the page runtime script.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* hek3ster landing page */

:root {
  --background: #ffffff;
  --foreground: #0f172a;
  --muted: #f1f5f9;
  --muted-foreground: #64748b;
  --border: #e2e8f0;
  --primary: #d50c2d;
  --primary-foreground: #ffffff;
  --accent: #fde8ec;
  --destructive: #dc2626;
  --terminal-bg: #0f172a;
  --terminal-text: #e2e8f0;
  --radius: 1rem;
  --content-max-width: 72rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

a {
  color: inherit;
}

.container {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 0 1rem;
}

.container.narrow {
  max-width: 56rem;
}

section[id] {
  scroll-margin-top: 4rem;
}

.text-gradient {
  background: linear-gradient(135deg, var(--primary), #f97316);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.section-header {
  text-align: center;
  margin: 0 auto 3rem;
  max-width: 42rem;
}

.section-header h2 {
  font-size: 2rem;
  margin-bottom: 1rem;
}

.section-header p {
  color: var(--muted-foreground);
}

/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: rgba(255, 255, 255, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4rem;
}

.logo {
  font-weight: 700;
  text-decoration: none;
  padding: 0.25rem 0.75rem;
  border-radius: 0.5rem;
  background: var(--primary);
  color: var(--primary-foreground);
}

.site-nav {
  display: flex;
  gap: 2rem;
}

.nav-link {
  font-size: 0.875rem;
  color: var(--muted-foreground);
  text-decoration: none;
}

.nav-link:hover {
  color: var(--foreground);
}

/* Hero */
.hero {
  padding: 8rem 0 4rem;
  text-align: center;
}

.hero-pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.375rem 1rem;
  border-radius: 999px;
  background: var(--accent);
  font-size: 0.875rem;
  margin-bottom: 1.5rem;
}

.pulse {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--primary);
}

.hero h1 {
  font-size: 3rem;
  line-height: 1.1;
  margin-bottom: 1.5rem;
}

.lead {
  font-size: 1.25rem;
  color: var(--muted-foreground);
  max-width: 42rem;
  margin: 0 auto 3rem;
}

.hero-stats {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 2rem;
  margin-bottom: 2.5rem;
}

.hero-stat-value {
  font-size: 1.25rem;
  font-weight: 700;
}

.hero-stat-label {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.cta-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.btn {
  display: inline-flex;
  align-items: center;
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  font-weight: 600;
  text-decoration: none;
}

.btn-primary {
  background: var(--primary);
  color: var(--primary-foreground);
}

.btn-outline {
  border: 1px solid var(--border);
}

/* Trust bar */
.trust-bar {
  padding: 1.5rem 0;
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
  background: var(--muted);
}

.trust-inner {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

/* Architecture */
.architecture,
.features,
.comparison,
.pricing,
.get-started {
  padding: 5rem 0;
}

.diagram {
  display: flex;
  align-items: stretch;
  gap: 1rem;
  overflow-x: auto;
}

.node {
  border: 2px solid var(--border);
  border-radius: 0.75rem;
  padding: 0.75rem;
  text-align: center;
  font-size: 0.875rem;
  font-weight: 600;
}

.node small {
  display: block;
  font-size: 0.625rem;
  font-weight: 400;
  color: var(--muted-foreground);
}

.lb-column,
.node-group {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.private-network {
  flex: 1;
  display: flex;
  gap: 1rem;
  position: relative;
  border: 2px dashed var(--primary);
  border-radius: var(--radius);
  padding: 1.5rem 1rem 1rem;
}

.private-network-label {
  position: absolute;
  top: -0.75rem;
  left: 1rem;
  background: var(--background);
  padding: 0 0.5rem;
  font-size: 0.75rem;
  color: var(--primary);
}

.node-server {
  background: #fef3c7;
  border-color: #fcd34d;
}

.node-agent {
  background: #dbeafe;
  border-color: #93c5fd;
}

.node-api-lb {
  border-color: #a855f7;
}

.node-nat {
  background: #dcfce7;
  border-color: #22c55e;
}

.legend {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.5rem;
  list-style: none;
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

/* Features */
.feature-grid,
.plan-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 2rem;
  margin-bottom: 5rem;
}

.feature-card,
.plan-card {
  padding: 1.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.highlights,
.plan-features {
  list-style: none;
  margin-top: 1rem;
}

.highlights li {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.capability-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 1.5rem;
}

.capability-card {
  padding: 1.25rem;
  border-radius: 0.75rem;
  background: var(--muted);
}

/* Tables */
.table-card {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow-x: auto;
}

.table-title {
  padding: 1.5rem;
  border-bottom: 1px solid var(--border);
}

table {
  width: 100%;
  border-collapse: collapse;
}

th,
td {
  text-align: left;
  padding: 1rem;
  border-bottom: 1px solid var(--border);
  font-size: 0.875rem;
}

.col-primary {
  color: var(--primary);
}

.factor,
.spec-kind {
  font-weight: 500;
}

.spec-config {
  font-family: ui-monospace, monospace;
  color: var(--muted-foreground);
}

.spec-description {
  text-align: right;
  font-weight: 600;
}

.marker {
  display: inline-block;
  width: 1rem;
  margin-right: 0.5rem;
  font-weight: 700;
}

.marker-good {
  color: var(--primary);
}

.marker-bad {
  color: var(--destructive);
}

.footnote {
  padding: 1rem;
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

/* Pricing */
.plan-highlighted {
  border-color: var(--primary);
  box-shadow: 0 10px 30px rgba(213, 12, 45, 0.1);
}

.badge {
  display: inline-block;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
  margin-bottom: 1rem;
}

.badge-highlight {
  background: var(--primary);
  color: var(--primary-foreground);
}

.badge-neutral {
  background: var(--muted);
}

.plan-price {
  margin: 0.5rem 0;
}

.price {
  font-size: 1.875rem;
  font-weight: 700;
}

.price-emphasis {
  color: var(--primary);
}

.per,
.plan-subtitle,
.excluded {
  color: var(--muted-foreground);
}

/* Steps */
.steps {
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.step {
  position: relative;
  display: flex;
  gap: 1.5rem;
}

.step-connector {
  position: absolute;
  left: 1.5rem;
  top: 4rem;
  width: 2px;
  height: calc(100% - 2rem);
  background: var(--border);
}

.step-number {
  flex-shrink: 0;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--primary);
  color: var(--primary-foreground);
  font-weight: 700;
}

.step-body {
  flex: 1;
  min-width: 0;
}

.code-block {
  position: relative;
  margin-top: 1rem;
}

.code-block pre {
  background: var(--terminal-bg);
  color: var(--terminal-text);
  border-radius: 0.5rem;
  padding: 1rem;
  overflow-x: auto;
  font-size: 0.875rem;
}

.copy-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.25rem 0.5rem;
  border: 1px solid var(--muted-foreground);
  border-radius: 0.25rem;
  background: transparent;
  color: var(--terminal-text);
  cursor: pointer;
  font-size: 0.75rem;
}

/* Toasts */
.toast-region {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 100;
}

.toast {
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  background: var(--foreground);
  color: var(--background);
  font-size: 0.875rem;
}

.toast-error {
  background: var(--destructive);
}

/* Footer */
.site-footer {
  padding: 4rem 0;
  border-top: 1px solid var(--border);
  background: var(--muted);
}

.footer-cta {
  text-align: center;
  margin-bottom: 3rem;
}

.footer-cta p {
  color: var(--muted-foreground);
  margin: 1rem 0 1.5rem;
}

.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding-top: 2rem;
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

@media (max-width: 768px) {
  .site-nav,
  .step-connector {
    display: none;
  }

  .hero h1 {
    font-size: 2.25rem;
  }
}
"#;

// Copy buttons write the step text to the clipboard and show exactly one
// toast per click: the success message, or the failure message when the
// clipboard API is missing or rejects the write.
const DEFAULT_JS: &str = r#"// hek3ster landing page runtime
(function() {
  'use strict';

  const region = document.getElementById('toast-region');
  const successMessage = (region && region.dataset.successMessage) || 'Copied to clipboard!';
  const failureMessage = (region && region.dataset.failureMessage) || 'Could not copy to clipboard';

  function showToast(message, kind) {
    if (!region) return;

    const toast = document.createElement('div');
    toast.className = 'toast toast-' + kind;
    toast.setAttribute('role', kind === 'error' ? 'alert' : 'status');
    toast.textContent = message;
    region.appendChild(toast);

    setTimeout(() => { toast.remove(); }, 2000);
  }

  async function copyText(text) {
    if (!navigator.clipboard || !navigator.clipboard.writeText) {
      throw new Error('Clipboard API unavailable');
    }
    await navigator.clipboard.writeText(text);
  }

  document.querySelectorAll('.copy-btn[data-copy-target]').forEach(btn => {
    btn.addEventListener('click', () => {
      const source = document.getElementById(btn.dataset.copyTarget);
      const text = source ? source.textContent : '';

      copyText(text || '')
        .then(() => showToast(successMessage, 'success'))
        .catch(err => {
          console.warn('[hek3ster] copy failed:', err);
          showToast(failureMessage, 'error');
        });
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".marker-good"));
        assert!(css.contains(".badge-highlight"));
        assert!(css.contains(".toast-error"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("navigator.clipboard.writeText"));
        assert!(js.contains("data-copy-target"));
        assert!(js.contains("showToast(failureMessage"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.step {
    display: flex;
    gap: 1.5rem;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.len() < css.len());
    }

    #[test]
    fn minifies_default_css() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();
        assert!(minified.len() < css.len());
    }
}
