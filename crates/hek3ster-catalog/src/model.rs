//! Record types making up the landing page content.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A headline figure shown under the hero title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    /// Large value text (e.g. "85% Savings")
    pub value: &'static str,
    /// Caption under the value
    pub label: &'static str,
}

/// A short disclaimer line shown in the trust bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrustNote {
    pub label: &'static str,
}

/// Shape of the cluster drawn in the architecture diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchitectureLayout {
    /// Number of control plane (server) nodes drawn
    pub control_plane_nodes: usize,
    /// Number of agent (worker) nodes drawn
    pub worker_nodes: usize,
    /// Legend entries, in display order
    pub legend: &'static [&'static str],
}

/// An outbound hyperlink. The target is opaque and never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Open in a new browsing context
    pub new_tab: bool,
}

/// A main feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
    /// Bullet points, in display order
    pub highlights: &'static [&'static str],
}

/// A tool installed and configured by hek3ster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// Verdict attached to a comparison cell.
///
/// The set is closed: anything else is rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Bad,
    Neutral,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Good, Status::Bad, Status::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "bad" => Ok(Self::Bad),
            "neutral" => Ok(Self::Neutral),
            other => Err(CatalogError::UnknownStatus(other.to_string())),
        }
    }
}

/// The fixed set of solutions compared in the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Competitor {
    Hek3ster,
    HetznerK3s,
    Managed,
    Terraform,
}

impl Competitor {
    pub const COUNT: usize = 4;

    /// Column order of the comparison table.
    pub const ALL: [Competitor; Self::COUNT] = [
        Competitor::Hek3ster,
        Competitor::HetznerK3s,
        Competitor::Managed,
        Competitor::Terraform,
    ];

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hek3ster => "hek3ster",
            Self::HetznerK3s => "hetzner-k3s",
            Self::Managed => "Managed Services",
            Self::Terraform => "Terraform-based",
        }
    }

    /// Stable key, used as a CSS class suffix.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hek3ster => "hek3ster",
            Self::HetznerK3s => "hetzner-k3s",
            Self::Managed => "managed",
            Self::Terraform => "terraform",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Hek3ster => 0,
            Self::HetznerK3s => 1,
            Self::Managed => 2,
            Self::Terraform => 3,
        }
    }
}

/// One cell of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonCell {
    pub value: &'static str,
    pub status: Status,
}

impl ComparisonCell {
    pub const fn good(value: &'static str) -> Self {
        Self {
            value,
            status: Status::Good,
        }
    }

    pub const fn bad(value: &'static str) -> Self {
        Self {
            value,
            status: Status::Bad,
        }
    }

    pub const fn neutral(value: &'static str) -> Self {
        Self {
            value,
            status: Status::Neutral,
        }
    }
}

/// A comparison factor with one cell per competitor.
///
/// Cells are stored in [`Competitor::ALL`] order, so every row carries the
/// same competitor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub factor: &'static str,
    pub cells: [ComparisonCell; Competitor::COUNT],
}

impl ComparisonRow {
    /// Cell for a given competitor.
    pub fn cell(&self, competitor: Competitor) -> &ComparisonCell {
        &self.cells[competitor.index()]
    }
}

/// A line item in a pricing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

/// A pricing card. The price is a preformatted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub badge: &'static str,
    pub price: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [PlanFeature],
    pub highlighted: bool,
}

/// A row of the technical data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClusterSpecRow {
    pub kind: &'static str,
    pub config: &'static str,
    pub description: &'static str,
}

/// An onboarding step. `code` is display-only text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based position
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// Errors raised when reading catalog values from text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown comparison status: {0:?} (expected good, bad or neutral)")]
    UnknownStatus(String),

    #[error("No onboarding step numbered {0}")]
    StepNotFound(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "great".parse::<Status>().unwrap_err();
        assert_eq!(err, CatalogError::UnknownStatus("great".to_string()));

        // Case matters; the source keys are lowercase.
        assert!("Good".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn row_cells_follow_competitor_order() {
        let row = ComparisonRow {
            factor: "Setup time",
            cells: [
                ComparisonCell::good("a"),
                ComparisonCell::bad("b"),
                ComparisonCell::neutral("c"),
                ComparisonCell::bad("d"),
            ],
        };

        assert_eq!(row.cell(Competitor::Hek3ster).value, "a");
        assert_eq!(row.cell(Competitor::HetznerK3s).value, "b");
        assert_eq!(row.cell(Competitor::Managed).status, Status::Neutral);
        assert_eq!(row.cell(Competitor::Terraform).value, "d");
    }

    #[test]
    fn competitor_labels_are_distinct() {
        let mut keys: Vec<_> = Competitor::ALL.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Competitor::COUNT);
    }
}
