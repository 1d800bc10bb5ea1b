//! Template engine for rendering page sections.

use minijinja::Environment;
use serde::Serialize;

/// Layout wrapped around the composed sections.
pub const LAYOUT: &str = "layout.html";

/// Template engine using minijinja.
///
/// Templates ending in `.html` are auto-escaped, so catalog text is always
/// emitted as literal text.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("Failed to add template {}: {}", name, e));
        }

        Self { env }
    }

    /// Render a template with any serializable context.
    pub fn render<S: Serialize>(&self, template: &str, ctx: S) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const TEMPLATES: &[(&str, &str)] = &[
    (LAYOUT, LAYOUT_TEMPLATE),
    ("header.html", HEADER_TEMPLATE),
    ("hero.html", HERO_TEMPLATE),
    ("trust_bar.html", TRUST_BAR_TEMPLATE),
    ("architecture.html", ARCHITECTURE_TEMPLATE),
    ("features.html", FEATURES_TEMPLATE),
    ("comparison.html", COMPARISON_TEMPLATE),
    ("pricing.html", PRICING_TEMPLATE),
    ("get_started.html", GET_STARTED_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
];

const LAYOUT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}{% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
{{ body | safe }}
  <div id="toast-region" class="toast-region" aria-live="polite" data-success-message="{{ success_message }}" data-failure-message="{{ failure_message }}"></div>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const HEADER_TEMPLATE: &str = r##"<header class="site-header">
  <div class="container header-inner">
    <a href="{{ base_url }}" class="logo">hek3ster</a>
    <nav class="site-nav">
    {% for link in nav %}
      <a href="#{{ link.anchor }}" class="nav-link">{{ link.label }}</a>
    {% endfor %}
    </nav>
  </div>
</header>"##;

const HERO_TEMPLATE: &str = r##"<div class="hero">
  <div class="container hero-inner">
    <div class="hero-pill"><span class="pulse"></span>Open Source CLI Tool</div>
    <h1>
      <span class="text-gradient">Deploy secure k3s cluster on</span><br>
      <span>Hetzner Cloud</span>
    </h1>
    <p class="lead">Production-ready private Kubernetes clusters created with a single command. No programming required, no complexity.</p>
    <div class="hero-stats">
    {% for stat in stats %}
      <div class="hero-stat">
        <div class="hero-stat-value">{{ stat.value }}</div>
        {% if stat.label %}<div class="hero-stat-label">{{ stat.label }}</div>{% endif %}
      </div>
    {% endfor %}
    </div>
    <div class="cta-row">
    {% for link in links %}{% if link.href %}
      <a href="{{ link.href }}" class="btn{% if loop.first %} btn-primary{% else %} btn-outline{% endif %}"{% if link.new_tab %} target="_blank" rel="noopener noreferrer"{% endif %}>{{ link.label }}</a>
    {% endif %}{% endfor %}
    </div>
  </div>
</div>"##;

const TRUST_BAR_TEMPLATE: &str = r##"<div class="trust-bar">
  <div class="container trust-inner">
  {% for note in notes %}
    <span class="trust-note">{{ note.label }}</span>
  {% endfor %}
  </div>
</div>"##;

const ARCHITECTURE_TEMPLATE: &str = r##"<div class="architecture">
  <div class="container">
    <div class="section-header">
      <h2>Secure Kubernetes Architecture</h2>
      <p>High-availability K3s cluster with private networking and NAT gateway for secure outbound traffic</p>
    </div>
    <div class="diagram">
      <div class="node node-external">External<br>Traffic</div>
      <div class="lb-column">
        <div class="node node-lb">Global LB<small>(HTTPS)</small></div>
        <div class="node node-api-lb">API LB<small>(6443/TCP)</small></div>
      </div>
      <div class="private-network">
        <span class="private-network-label">Private Network (No Public IPs)</span>
        <div class="node-group">
          <div class="node-group-title">Control Plane (HA)</div>
          {% for n in range(1, layout.control_plane_nodes + 1) %}
          <div class="node node-server">Server Node {{ n }}<small>K3s Server &middot; etcd</small></div>
          {% endfor %}
        </div>
        <div class="node-link">kubectl</div>
        <div class="node-group">
          <div class="node-group-title">Worker Nodes</div>
          {% for n in range(1, layout.worker_nodes + 1) %}
          <div class="node node-agent">Agent Node {{ n }}<small>K3s Agent + Workloads</small></div>
          {% endfor %}
        </div>
      </div>
      <div class="node node-nat">NAT<br>Gateway<small>Outbound Only</small></div>
      <div class="node node-internet">Internet<small>(APIs, Registries)</small></div>
    </div>
    <ul class="legend">
    {% for entry in layout.legend %}
      <li class="legend-item legend-{{ loop.index }}">{{ entry }}</li>
    {% endfor %}
    </ul>
  </div>
</div>"##;

const FEATURES_TEMPLATE: &str = r##"<div class="features">
  <div class="container">
    <div class="feature-grid">
    {% for feature in features %}
      <div class="feature-card">
        <h3>{{ feature.title }}</h3>
        {% if feature.description %}<p>{{ feature.description }}</p>{% endif %}
        <ul class="highlights">
        {% for item in feature.highlights %}
          <li>{{ item }}</li>
        {% endfor %}
        </ul>
      </div>
    {% endfor %}
    </div>
    <div class="section-header">
      <h2>What tools are installed and configured</h2>
      <p>Everything you need for production.</p>
    </div>
    <div class="capability-grid">
    {% for capability in capabilities %}
      <div class="capability-card">
        <h4>{{ capability.title }}</h4>
        {% if capability.description %}<p>{{ capability.description }}</p>{% endif %}
      </div>
    {% endfor %}
    </div>
  </div>
</div>"##;

const COMPARISON_TEMPLATE: &str = r##"<div class="comparison">
  <div class="container">
    <div class="section-header">
      <h2>How <span class="text-gradient">hek3ster</span> Compares</h2>
      <p>See how hek3ster stacks up against managed services and Terraform-based solutions</p>
    </div>
    <div class="table-card">
      <table class="comparison-table">
        <thead>
          <tr>
            <th>Factor</th>
            {% for column in columns %}<th class="col-{{ column.key }}{% if column.primary %} col-primary{% endif %}">{{ column.label }}</th>
            {% endfor %}
          </tr>
        </thead>
        <tbody>
        {% for row in rows %}
          <tr class="comparison-row">
            <td class="factor">{{ row.factor }}</td>
            {% for cell in row.cells %}<td class="cell status-{{ cell.status }}">{% if cell.marker %}<span class="marker {{ cell.marker.css }}" aria-label="{{ cell.marker.label }}">{{ cell.marker.glyph }}</span>{% endif %}<span class="cell-value">{{ cell.value }}</span></td>
            {% endfor %}
          </tr>
        {% endfor %}
        </tbody>
      </table>
      {% if footnote %}<p class="footnote">{{ footnote }}</p>{% endif %}
    </div>
  </div>
</div>"##;

const PRICING_TEMPLATE: &str = r##"<div class="pricing">
  <div class="container">
    <div class="section-header">
      <h2>Save Up to <span class="text-gradient">80%</span> vs Other Cloud Providers</h2>
      <p>hek3ster is free, you only pay for Hetzner Cloud infrastructure</p>
    </div>
    <div class="plan-grid">
    {% for plan in plans %}
      <div class="plan-card{% if plan.highlighted %} plan-highlighted{% endif %}">
        {% if plan.badge %}<span class="badge {{ plan.badge_css }}">{{ plan.badge }}</span>{% endif %}
        <h3>{{ plan.name }}</h3>
        <div class="plan-price"><span class="price {{ plan.price_css }}">{{ plan.price }}</span><span class="per">/month</span></div>
        {% if plan.subtitle %}<p class="plan-subtitle">{{ plan.subtitle }}</p>{% endif %}
        <ul class="plan-features">
        {% for feature in plan.features %}
          <li class="{% if feature.included %}included{% else %}excluded{% endif %}"><span class="marker {{ feature.marker.css }}" aria-label="{{ feature.marker.label }}">{{ feature.marker.glyph }}</span>{{ feature.text }}</li>
        {% endfor %}
        </ul>
      </div>
    {% endfor %}
    </div>
    <div class="table-card">
      <h3 class="table-title">Project Technical Data</h3>
      <table class="spec-table">
        <tbody>
        {% for spec in specs %}
          <tr class="spec-row">
            <td class="spec-kind">{{ spec.kind }}</td>
            <td class="spec-config">{{ spec.config }}</td>
            <td class="spec-description">{{ spec.description }}</td>
          </tr>
        {% endfor %}
        </tbody>
      </table>
    </div>
  </div>
</div>"##;

const GET_STARTED_TEMPLATE: &str = r##"<div class="get-started">
  <div class="container narrow">
    <div class="section-header">
      <h2>Get Started in <span class="text-gradient">{{ steps | length }} Steps</span></h2>
      <p>From zero to production-ready cluster in minutes</p>
    </div>
    <div class="steps">
    {% for step in steps %}
      <div class="step" data-step="{{ step.number }}">
        {% if step.has_connector %}<div class="step-connector" aria-hidden="true"></div>{% endif %}
        <div class="step-number">{{ step.number }}</div>
        <div class="step-body">
          <h3>{{ step.title }}</h3>
          {% if step.description %}<p>{{ step.description }}</p>{% endif %}
          {% if step.code %}<div class="code-block">
            <pre><code id="{{ step.code_id }}">{{ step.code }}</code></pre>
            <button type="button" class="copy-btn" data-copy-target="{{ step.code_id }}" aria-label="Copy to clipboard">Copy</button>
          </div>{% endif %}
        </div>
      </div>
    {% endfor %}
    </div>
  </div>
</div>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="site-footer">
  <div class="container">
    <div class="footer-cta">
      <h2>Ready to Get Started?</h2>
      <p>Join thousands of developers running production Kubernetes on Hetzner Cloud</p>
      <div class="cta-row">
      {% for link in links %}{% if link.href %}
        <a href="{{ link.href }}" class="btn{% if loop.first %} btn-primary{% else %} btn-outline{% endif %}"{% if link.new_tab %} target="_blank" rel="noopener noreferrer"{% endif %}>{{ link.label }}</a>
      {% endif %}{% endfor %}
      </div>
    </div>
    <div class="footer-bottom">
      <span class="logo">hek3ster</span>
      <p>Made with &hearts; by the community</p>
      {% if repository_url %}<a href="{{ repository_url }}" class="footer-repo" target="_blank" rel="noopener noreferrer">GitHub</a>{% endif %}
    </div>
  </div>
</footer>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn all_templates_load() {
        let engine = TemplateEngine::new();
        for (name, _) in TEMPLATES {
            assert!(engine.env.get_template(name).is_ok(), "missing {}", name);
        }
    }

    #[test]
    fn renders_layout() {
        let engine = TemplateEngine::new();

        let html = engine
            .render(
                LAYOUT,
                context! {
                    title => "hek3ster",
                    description => "",
                    base_url => "/",
                    styles => Vec::<String>::new(),
                    body => "<main>Hello</main>",
                    success_message => "Copied to clipboard!",
                    failure_message => "Could not copy to clipboard",
                },
            )
            .unwrap();

        assert!(html.contains("<title>hek3ster</title>"));
        assert!(html.contains("<main>Hello</main>"));
        assert!(html.contains(r#"data-success-message="Copied to clipboard!""#));
        assert!(!html.contains(r#"name="description""#));
    }

    #[test]
    fn escapes_catalog_text() {
        let engine = TemplateEngine::new();

        let html = engine
            .render(
                "trust_bar.html",
                context! { notes => vec![context! { label => "<script>x</script>" }] },
            )
            .unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>x"));
    }
}
