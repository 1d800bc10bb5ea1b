//! Section renderers.
//!
//! One pure function per page section. Each maps a slice of the catalog to an
//! HTML block, keeps the input order, and renders an empty container for an
//! empty slice.

use serde::Serialize;

use hek3ster_catalog::{
    ArchitectureLayout, CapabilityItem, ClusterSpecRow, ComparisonRow, Competitor, ExternalLink,
    FeatureItem, HeroStat, PricingPlan, Status, Step, TrustNote,
};

use crate::templates::TemplateEngine;

/// Errors raised while rendering a section.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render {section}: {source}")]
    Template {
        section: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

/// Icon drawn next to a comparison value or plan line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marker {
    Affirmative,
    Negative,
}

impl Marker {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Affirmative => "\u{2713}",
            Self::Negative => "\u{2717}",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Affirmative => "marker-good",
            Self::Negative => "marker-bad",
        }
    }

    fn aria_label(self) -> &'static str {
        match self {
            Self::Affirmative => "yes",
            Self::Negative => "no",
        }
    }
}

/// Marker for a comparison status. Neutral cells get none.
pub fn status_marker(status: Status) -> Option<Marker> {
    match status {
        Status::Good => Some(Marker::Affirmative),
        Status::Bad => Some(Marker::Negative),
        Status::Neutral => None,
    }
}

/// Navigation entry shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Serialize)]
struct MarkerView {
    glyph: &'static str,
    css: &'static str,
    label: &'static str,
}

impl From<Marker> for MarkerView {
    fn from(marker: Marker) -> Self {
        Self {
            glyph: marker.glyph(),
            css: marker.css_class(),
            label: marker.aria_label(),
        }
    }
}

fn render<S: Serialize>(
    engine: &TemplateEngine,
    section: &'static str,
    template: &str,
    ctx: S,
) -> Result<String, RenderError> {
    engine
        .render(template, ctx)
        .map_err(|source| RenderError::Template { section, source })
}

/// Site header with the logo and in-page navigation.
pub fn render_header(
    engine: &TemplateEngine,
    nav: &[NavLink],
    base_url: &str,
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        nav: &'a [NavLink],
        base_url: &'a str,
    }

    render(engine, "header", "header.html", Ctx { nav, base_url })
}

/// Hero banner with headline stats and call-to-action links.
pub fn render_hero(
    engine: &TemplateEngine,
    stats: &[HeroStat],
    links: &[ExternalLink],
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        stats: &'a [HeroStat],
        links: &'a [ExternalLink],
    }

    render(engine, "hero", "hero.html", Ctx { stats, links })
}

/// Strip of short trust notes under the hero.
pub fn render_trust_bar(
    engine: &TemplateEngine,
    notes: &[TrustNote],
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        notes: &'a [TrustNote],
    }

    render(engine, "trust bar", "trust_bar.html", Ctx { notes })
}

/// Cluster diagram with one box per configured node.
pub fn render_architecture(
    engine: &TemplateEngine,
    layout: &ArchitectureLayout,
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        layout: &'a ArchitectureLayout,
    }

    render(engine, "architecture", "architecture.html", Ctx { layout })
}

/// Feature cards followed by the installed-tools grid.
pub fn render_features(
    engine: &TemplateEngine,
    features: &[FeatureItem],
    capabilities: &[CapabilityItem],
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        features: &'a [FeatureItem],
        capabilities: &'a [CapabilityItem],
    }

    render(
        engine,
        "features",
        "features.html",
        Ctx {
            features,
            capabilities,
        },
    )
}

#[derive(Serialize)]
struct ColumnView {
    key: &'static str,
    label: &'static str,
    primary: bool,
}

#[derive(Serialize)]
struct CellView<'a> {
    value: &'a str,
    status: Status,
    marker: Option<MarkerView>,
}

#[derive(Serialize)]
struct RowView<'a> {
    factor: &'a str,
    cells: Vec<CellView<'a>>,
}

/// Comparison table, one column per competitor and one row per factor.
pub fn render_comparison(
    engine: &TemplateEngine,
    rows: &[ComparisonRow],
    footnote: &str,
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        columns: Vec<ColumnView>,
        rows: Vec<RowView<'a>>,
        footnote: &'a str,
    }

    let columns = Competitor::ALL
        .iter()
        .map(|&c| ColumnView {
            key: c.key(),
            label: c.label(),
            primary: c == Competitor::Hek3ster,
        })
        .collect();

    let rows = rows
        .iter()
        .map(|row| RowView {
            factor: row.factor,
            cells: Competitor::ALL
                .iter()
                .map(|&c| {
                    let cell = row.cell(c);
                    CellView {
                        value: cell.value,
                        status: cell.status,
                        marker: status_marker(cell.status).map(MarkerView::from),
                    }
                })
                .collect(),
        })
        .collect();

    render(
        engine,
        "comparison",
        "comparison.html",
        Ctx {
            columns,
            rows,
            footnote,
        },
    )
}

#[derive(Serialize)]
struct PlanFeatureView<'a> {
    text: &'a str,
    included: bool,
    marker: MarkerView,
}

#[derive(Serialize)]
struct PlanView<'a> {
    name: &'a str,
    badge: &'a str,
    badge_css: &'static str,
    price: &'a str,
    price_css: &'static str,
    subtitle: &'a str,
    highlighted: bool,
    features: Vec<PlanFeatureView<'a>>,
}

impl<'a> From<&'a PricingPlan> for PlanView<'a> {
    fn from(plan: &'a PricingPlan) -> Self {
        let (badge_css, price_css) = if plan.highlighted {
            ("badge-highlight", "price-emphasis")
        } else {
            ("badge-neutral", "")
        };

        Self {
            name: plan.name,
            badge: plan.badge,
            badge_css,
            price: plan.price,
            price_css,
            subtitle: plan.subtitle,
            highlighted: plan.highlighted,
            features: plan
                .features
                .iter()
                .map(|f| PlanFeatureView {
                    text: f.text,
                    included: f.included,
                    marker: if f.included {
                        Marker::Affirmative
                    } else {
                        Marker::Negative
                    }
                    .into(),
                })
                .collect(),
        }
    }
}

/// Pricing cards followed by the technical data table.
///
/// Highlighting is applied per plan; nothing here checks how many plans are
/// highlighted.
pub fn render_pricing(
    engine: &TemplateEngine,
    plans: &[PricingPlan],
    specs: &[ClusterSpecRow],
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        plans: Vec<PlanView<'a>>,
        specs: &'a [ClusterSpecRow],
    }

    let plans = plans.iter().map(PlanView::from).collect();

    render(engine, "pricing", "pricing.html", Ctx { plans, specs })
}

#[derive(Serialize)]
struct StepView<'a> {
    number: usize,
    title: &'a str,
    description: &'a str,
    code: &'a str,
    code_id: String,
    has_connector: bool,
}

/// Onboarding steps. Every step but the last draws a connector to the next.
pub fn render_get_started(
    engine: &TemplateEngine,
    steps: &[Step],
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        steps: Vec<StepView<'a>>,
    }

    let count = steps.len();
    let steps = steps
        .iter()
        .enumerate()
        .map(|(i, step)| StepView {
            number: step.number,
            title: step.title,
            description: step.description,
            code: step.code,
            code_id: format!("step-{}-code", i + 1),
            has_connector: i + 1 < count,
        })
        .collect();

    render(engine, "get started", "get_started.html", Ctx { steps })
}

/// Closing call to action and repository link.
pub fn render_footer(
    engine: &TemplateEngine,
    links: &[ExternalLink],
    repository_url: &str,
) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Ctx<'a> {
        links: &'a [ExternalLink],
        repository_url: &'a str,
    }

    render(
        engine,
        "footer",
        "footer.html",
        Ctx {
            links,
            repository_url,
        },
    )
}
