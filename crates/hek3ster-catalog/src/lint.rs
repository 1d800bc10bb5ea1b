//! Authoring checks over catalog content.
//!
//! None of these stop a build: renderers cope with every case reported here.

use crate::Catalog;

/// A content-authoring problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintIssue {
    #[error("More than one pricing plan is highlighted: {}", .0.join(", "))]
    MultipleHighlightedPlans(Vec<String>),

    #[error("Step at position {position} is numbered {found}, expected {expected}")]
    StepOutOfSequence {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("Empty {field} in {record}")]
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
}

pub(crate) fn lint(catalog: &Catalog<'_>) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    let highlighted: Vec<String> = catalog
        .pricing_plans
        .iter()
        .filter(|p| p.highlighted)
        .map(|p| p.name.to_string())
        .collect();
    if highlighted.len() > 1 {
        issues.push(LintIssue::MultipleHighlightedPlans(highlighted));
    }

    for (position, step) in catalog.steps.iter().enumerate() {
        let expected = position + 1;
        if step.number != expected {
            issues.push(LintIssue::StepOutOfSequence {
                position,
                expected,
                found: step.number,
            });
        }
    }

    let mut require = |record: &'static str, field: &'static str, value: &str| {
        if value.trim().is_empty() {
            issues.push(LintIssue::EmptyField { record, field });
        }
    };

    for feature in catalog.features {
        require("feature", "title", feature.title);
    }
    for capability in catalog.capabilities {
        require("capability", "title", capability.title);
    }
    for row in catalog.comparison {
        require("comparison row", "factor", row.factor);
    }
    for plan in catalog.pricing_plans {
        require("pricing plan", "name", plan.name);
        require("pricing plan", "price", plan.price);
    }
    for step in catalog.steps {
        require("step", "title", step.title);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PricingPlan, Step};
    use pretty_assertions::assert_eq;

    fn plan(name: &'static str, highlighted: bool) -> PricingPlan {
        PricingPlan {
            name,
            badge: "",
            price: "$1",
            subtitle: "",
            features: &[],
            highlighted,
        }
    }

    fn step(number: usize) -> Step {
        Step {
            number,
            title: "Step",
            description: "",
            code: "",
        }
    }

    #[test]
    fn reports_multiple_highlighted_plans() {
        let plans = [plan("A", true), plan("B", false), plan("C", true)];
        let catalog = Catalog {
            pricing_plans: &plans,
            ..Catalog::builtin()
        };

        assert_eq!(
            catalog.lint(),
            vec![LintIssue::MultipleHighlightedPlans(vec![
                "A".to_string(),
                "C".to_string()
            ])]
        );
    }

    #[test]
    fn reports_gaps_in_step_numbers() {
        let steps = [step(1), step(3)];
        let catalog = Catalog {
            steps: &steps,
            ..Catalog::builtin()
        };

        assert_eq!(
            catalog.lint(),
            vec![LintIssue::StepOutOfSequence {
                position: 1,
                expected: 2,
                found: 3
            }]
        );
    }

    #[test]
    fn reports_empty_price() {
        let plans = [PricingPlan {
            price: " ",
            ..plan("Free", false)
        }];
        let catalog = Catalog {
            pricing_plans: &plans,
            ..Catalog::builtin()
        };

        assert_eq!(
            catalog.lint(),
            vec![LintIssue::EmptyField {
                record: "pricing plan",
                field: "price"
            }]
        );
    }

    #[test]
    fn empty_collections_are_clean() {
        let catalog = Catalog {
            features: &[],
            capabilities: &[],
            comparison: &[],
            pricing_plans: &[],
            steps: &[],
            ..Catalog::builtin()
        };

        assert!(catalog.lint().is_empty());
    }
}
