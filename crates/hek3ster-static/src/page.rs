//! Page composition: fixed section order, anchors and navigation.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use hek3ster_catalog::Catalog;
use hek3ster_clipboard::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};

use crate::sections::{self, NavLink, RenderError};
use crate::templates::{TemplateEngine, LAYOUT};

/// Sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Hero,
    TrustBar,
    Architecture,
    Features,
    Comparison,
    Pricing,
    GetStarted,
    Footer,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 9] = [
        SectionKind::Header,
        SectionKind::Hero,
        SectionKind::TrustBar,
        SectionKind::Architecture,
        SectionKind::Features,
        SectionKind::Comparison,
        SectionKind::Pricing,
        SectionKind::GetStarted,
        SectionKind::Footer,
    ];

    /// Anchor of a navigable section.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::Architecture => Some("architecture"),
            Self::Features => Some("features"),
            Self::Comparison => Some("comparison"),
            Self::Pricing => Some("pricing"),
            Self::GetStarted => Some("docs"),
            Self::Header | Self::Hero | Self::TrustBar | Self::Footer => None,
        }
    }

    /// Whether the section sits inside `<main>`.
    fn in_main(self) -> bool {
        !matches!(self, Self::Header | Self::Footer)
    }
}

/// Header navigation, in display order.
pub static NAVIGATION: &[NavLink] = &[
    NavLink {
        label: "Architecture",
        anchor: "architecture",
    },
    NavLink {
        label: "Features",
        anchor: "features",
    },
    NavLink {
        label: "Compare",
        anchor: "comparison",
    },
    NavLink {
        label: "Savings",
        anchor: "pricing",
    },
    NavLink {
        label: "Deploy",
        anchor: "docs",
    },
];

/// Navigation anchors that do not label exactly one section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnchorError {
    #[error("Navigation link {label:?} points to #{anchor}, which no section defines")]
    Missing {
        label: &'static str,
        anchor: &'static str,
    },

    #[error("Anchor #{anchor} is defined by {count} sections")]
    Duplicate { anchor: String, count: usize },
}

/// One rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedSection {
    pub kind: SectionKind,
    pub anchor: Option<&'static str>,
    pub html: String,
}

/// All sections in order, plus the navigation pointing into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPage {
    pub sections: Vec<ComposedSection>,
    pub nav: Vec<NavLink>,
}

/// Values for the page layout.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub base_url: String,
    /// Extra stylesheet URLs, loaded before the main stylesheet
    pub styles: Vec<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "hek3ster - Secure k3s clusters on Hetzner Cloud".to_string(),
            description: String::new(),
            base_url: "/".to_string(),
            styles: vec![],
        }
    }
}

/// Errors from composing or rendering the page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to render page layout: {0}")]
    Layout(#[from] minijinja::Error),

    #[error("Broken navigation: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Anchors(Vec<AnchorError>),
}

/// Render every section in [`SectionKind::ORDER`].
pub fn compose(
    engine: &TemplateEngine,
    catalog: &Catalog<'_>,
    nav: &[NavLink],
    base_url: &str,
) -> Result<ComposedPage, PageError> {
    let mut sections = Vec::with_capacity(SectionKind::ORDER.len());

    for kind in SectionKind::ORDER {
        let inner = render_section(engine, kind, catalog, nav, base_url)?;
        let anchor = kind.anchor();
        let html = match anchor {
            Some(id) => format!("<section id=\"{}\">\n{}\n</section>", id, inner),
            None => inner,
        };
        sections.push(ComposedSection { kind, anchor, html });
    }

    let page = ComposedPage {
        sections,
        nav: nav.to_vec(),
    };

    page.verify_anchors().map_err(PageError::Anchors)?;

    Ok(page)
}

fn render_section(
    engine: &TemplateEngine,
    kind: SectionKind,
    catalog: &Catalog<'_>,
    nav: &[NavLink],
    base_url: &str,
) -> Result<String, RenderError> {
    match kind {
        SectionKind::Header => sections::render_header(engine, nav, base_url),
        SectionKind::Hero => sections::render_hero(engine, catalog.hero_stats, catalog.hero_links),
        SectionKind::TrustBar => sections::render_trust_bar(engine, catalog.trust_notes),
        SectionKind::Architecture => sections::render_architecture(engine, catalog.architecture),
        SectionKind::Features => {
            sections::render_features(engine, catalog.features, catalog.capabilities)
        }
        SectionKind::Comparison => {
            sections::render_comparison(engine, catalog.comparison, catalog.comparison_footnote)
        }
        SectionKind::Pricing => {
            sections::render_pricing(engine, catalog.pricing_plans, catalog.cluster_specs)
        }
        SectionKind::GetStarted => sections::render_get_started(engine, catalog.steps),
        SectionKind::Footer => {
            sections::render_footer(engine, catalog.footer_links, catalog.repository_url)
        }
    }
}

impl ComposedPage {
    /// Check that every navigation anchor labels exactly one section.
    pub fn verify_anchors(&self) -> Result<(), Vec<AnchorError>> {
        let anchors = self.sections.iter().filter_map(|s| s.anchor);
        check_anchors(&self.nav, anchors)
    }

    /// Section markup, with everything between header and footer in `<main>`.
    pub fn body_html(&self) -> String {
        let mut body = String::new();
        let mut in_main = false;

        for section in &self.sections {
            let wants_main = section.kind.in_main();
            if wants_main && !in_main {
                body.push_str("<main>\n");
            } else if !wants_main && in_main {
                body.push_str("</main>\n");
            }
            in_main = wants_main;

            body.push_str(&section.html);
            body.push('\n');
        }

        if in_main {
            body.push_str("</main>\n");
        }

        body
    }

    /// Render the full HTML document.
    pub fn render_document(
        &self,
        engine: &TemplateEngine,
        meta: &PageMeta,
    ) -> Result<String, PageError> {
        #[derive(Serialize)]
        struct Ctx<'a> {
            title: &'a str,
            description: &'a str,
            base_url: &'a str,
            styles: &'a [String],
            body: String,
            success_message: &'static str,
            failure_message: &'static str,
        }

        let html = engine.render(
            LAYOUT,
            Ctx {
                title: &meta.title,
                description: &meta.description,
                base_url: &meta.base_url,
                styles: &meta.styles,
                body: self.body_html(),
                success_message: COPY_SUCCESS_MESSAGE,
                failure_message: COPY_FAILURE_MESSAGE,
            },
        )?;

        Ok(html)
    }
}

/// Compare navigation targets against the anchors that sections define.
pub fn check_anchors<'a>(
    nav: &[NavLink],
    anchors: impl IntoIterator<Item = &'a str>,
) -> Result<(), Vec<AnchorError>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for anchor in anchors {
        *counts.entry(anchor).or_default() += 1;
    }

    let mut errors = Vec::new();
    for link in nav {
        match counts.get(link.anchor).copied().unwrap_or(0) {
            0 => errors.push(AnchorError::Missing {
                label: link.label,
                anchor: link.anchor,
            }),
            1 => {}
            count => errors.push(AnchorError::Duplicate {
                anchor: link.anchor.to_string(),
                count,
            }),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Element ids defined in rendered HTML, in document order.
pub fn element_ids(html: &str) -> Vec<String> {
    static ID_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"\sid="([^"]+)""#).expect("Invalid element id regex"));

    ID_RE
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Re-check the anchor contract against a rendered document.
pub fn verify_document_anchors(nav: &[NavLink], html: &str) -> Result<(), Vec<AnchorError>> {
    let ids = element_ids(html);
    check_anchors(nav, ids.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn builtin_page() -> ComposedPage {
        compose(&TemplateEngine::new(), &Catalog::builtin(), NAVIGATION, "/").unwrap()
    }

    #[test]
    fn sections_follow_fixed_order() {
        let page = builtin_page();
        let kinds: Vec<_> = page.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ORDER.to_vec());
    }

    #[test]
    fn navigable_sections_carry_anchors() {
        let page = builtin_page();
        let anchors: Vec<_> = page.sections.iter().filter_map(|s| s.anchor).collect();
        assert_eq!(
            anchors,
            vec!["architecture", "features", "comparison", "pricing", "docs"]
        );

        let comparison = &page.sections[5];
        assert!(comparison.html.starts_with(r#"<section id="comparison">"#));
        assert!(comparison.html.ends_with("</section>"));
    }

    #[test]
    fn every_nav_anchor_exists_once() {
        let page = builtin_page();
        assert_eq!(page.verify_anchors(), Ok(()));

        for link in NAVIGATION {
            let count = page
                .sections
                .iter()
                .filter(|s| s.anchor == Some(link.anchor))
                .count();
            assert_eq!(count, 1, "anchor {}", link.anchor);
        }
    }

    #[test]
    fn reports_missing_anchor() {
        let nav = [NavLink {
            label: "Blog",
            anchor: "blog",
        }];

        let err = check_anchors(&nav, ["features"]).unwrap_err();

        assert_eq!(
            err,
            vec![AnchorError::Missing {
                label: "Blog",
                anchor: "blog"
            }]
        );
    }

    #[test]
    fn reports_duplicate_anchor() {
        let nav = [NavLink {
            label: "Features",
            anchor: "features",
        }];

        let err = check_anchors(&nav, ["features", "features"]).unwrap_err();

        assert_eq!(
            err,
            vec![AnchorError::Duplicate {
                anchor: "features".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn compose_rejects_broken_navigation() {
        let nav = [NavLink {
            label: "Blog",
            anchor: "blog",
        }];

        let result = compose(&TemplateEngine::new(), &Catalog::builtin(), &nav, "/");

        assert!(matches!(result, Err(PageError::Anchors(ref errors)) if errors.len() == 1));
    }

    #[test]
    fn body_wraps_main_content() {
        let body = builtin_page().body_html();

        let header = body.find("<header").unwrap();
        let main_open = body.find("<main>").unwrap();
        let main_close = body.find("</main>").unwrap();
        let footer = body.find("<footer").unwrap();

        assert!(header < main_open && main_open < main_close && main_close < footer);
        assert_eq!(body.matches("<main>").count(), 1);
    }

    #[test]
    fn document_anchors_match_navigation() {
        let engine = TemplateEngine::new();
        let html = builtin_page()
            .render_document(&engine, &PageMeta::default())
            .unwrap();

        assert_eq!(verify_document_anchors(NAVIGATION, &html), Ok(()));
        for link in NAVIGATION {
            assert_eq!(html.matches(&format!(r#"id="{}""#, link.anchor)).count(), 1);
        }
    }

    #[test]
    fn document_carries_toast_messages() {
        let engine = TemplateEngine::new();
        let html = builtin_page()
            .render_document(&engine, &PageMeta::default())
            .unwrap();

        assert!(html.contains(r#"id="toast-region""#));
        assert!(html.contains(COPY_SUCCESS_MESSAGE));
        assert_eq!(html.matches(r#"class="copy-btn""#).count(), 3);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let engine = TemplateEngine::new();
        let catalog = Catalog::builtin();
        let meta = PageMeta::default();

        let first = compose(&engine, &catalog, NAVIGATION, "/").unwrap();
        let second = compose(&engine, &catalog, NAVIGATION, "/").unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.render_document(&engine, &meta).unwrap(),
            second.render_document(&engine, &meta).unwrap()
        );
    }

    #[test]
    fn empty_catalog_still_composes() {
        let catalog = Catalog {
            hero_stats: &[],
            hero_links: &[],
            trust_notes: &[],
            features: &[],
            capabilities: &[],
            comparison: &[],
            pricing_plans: &[],
            cluster_specs: &[],
            steps: &[],
            footer_links: &[],
            ..Catalog::builtin()
        };

        let page = compose(&TemplateEngine::new(), &catalog, NAVIGATION, "/").unwrap();

        assert_eq!(page.sections.len(), SectionKind::ORDER.len());
        assert!(page.sections[5].html.contains("<tbody>"));
    }

    #[test]
    fn element_ids_are_stable_across_calls() {
        let html = r#"<a id="x"></a>"#;
        assert_eq!(element_ids(html), element_ids(html));
        assert_eq!(element_ids("<p>no ids</p>"), Vec::<String>::new());
    }

    #[test]
    fn extracts_element_ids() {
        let ids = element_ids(r#"<section id="a"><code id="b-1">x</code></section><p data-id="no">"#);
        assert_eq!(ids, vec!["a".to_string(), "b-1".to_string()]);
    }
}
