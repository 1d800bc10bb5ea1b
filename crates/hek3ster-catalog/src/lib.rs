//! Content catalog for the hek3ster landing page.
//!
//! All records are `'static` literals compiled into the binary. A [`Catalog`]
//! bundles borrowed slices of them so renderers can be driven by the built-in
//! content or by any other set of records.

pub mod content;
pub mod lint;
pub mod model;

pub use lint::LintIssue;
pub use model::{
    ArchitectureLayout, CapabilityItem, CatalogError, ClusterSpecRow, ComparisonCell,
    ComparisonRow, Competitor, ExternalLink, FeatureItem, HeroStat, PlanFeature, PricingPlan,
    Status, Step, TrustNote,
};

/// Read-only view over every record collection on the page.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub hero_stats: &'a [HeroStat],
    pub hero_links: &'a [ExternalLink],
    pub trust_notes: &'a [TrustNote],
    pub architecture: &'a ArchitectureLayout,
    pub features: &'a [FeatureItem],
    pub capabilities: &'a [CapabilityItem],
    pub comparison: &'a [ComparisonRow],
    pub comparison_footnote: &'a str,
    pub pricing_plans: &'a [PricingPlan],
    pub cluster_specs: &'a [ClusterSpecRow],
    pub steps: &'a [Step],
    pub footer_links: &'a [ExternalLink],
    pub repository_url: &'a str,
}

impl Catalog<'static> {
    /// The content shipped with the site.
    pub fn builtin() -> Self {
        Self {
            hero_stats: content::HERO_STATS,
            hero_links: content::HERO_LINKS,
            trust_notes: content::TRUST_NOTES,
            architecture: &content::ARCHITECTURE,
            features: content::FEATURES,
            capabilities: content::CAPABILITIES,
            comparison: content::COMPARISON,
            comparison_footnote: content::COMPARISON_FOOTNOTE,
            pricing_plans: content::PRICING_PLANS,
            cluster_specs: content::CLUSTER_SPECS,
            steps: content::STEPS,
            footer_links: content::FOOTER_LINKS,
            repository_url: content::REPOSITORY_URL,
        }
    }
}

impl<'a> Catalog<'a> {
    /// Look up an onboarding step by its 1-based number.
    pub fn step(&self, number: usize) -> Result<&'a Step, CatalogError> {
        self.steps
            .iter()
            .find(|s| s.number == number)
            .ok_or(CatalogError::StepNotFound(number))
    }

    /// Check content-authoring rules that renderers do not enforce.
    pub fn lint(&self) -> Vec<LintIssue> {
        lint::lint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_steps_are_numbered_in_order() {
        let catalog = Catalog::builtin();
        let numbers: Vec<_> = catalog.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn builtin_has_single_highlighted_plan() {
        let catalog = Catalog::builtin();
        let highlighted: Vec<_> = catalog
            .pricing_plans
            .iter()
            .filter(|p| p.highlighted)
            .map(|p| p.name)
            .collect();
        assert_eq!(highlighted, vec!["hek3ster + Hetzner Cloud"]);
    }

    #[test]
    fn builtin_passes_lint() {
        assert!(Catalog::builtin().lint().is_empty());
    }

    #[test]
    fn finds_step_by_number() {
        let catalog = Catalog::builtin();

        let step = catalog.step(3).unwrap();
        assert!(step.code.contains("hek3ster create --config cluster.yaml"));

        assert_eq!(catalog.step(0), Err(CatalogError::StepNotFound(0)));
        assert_eq!(catalog.step(4), Err(CatalogError::StepNotFound(4)));
    }

    #[test]
    fn cluster_yaml_is_kept_verbatim() {
        let yaml = Catalog::builtin().step(2).unwrap().code;
        assert!(yaml.starts_with("# cluster.yaml\n---\nhetzner_token: xxxx\n"));
        assert!(yaml.ends_with("additional_post_k3s_commands:\n  - apt autoremove -y"));
        assert!(yaml.contains("cluster_name: &cluster_name demo"));
    }
}
