//! Homophily: how much the network clusters by category.
//!
//! `homophily_index = same / (same + cross)` over every relationship whose
//! endpoints are both known contacts. A high index means people mostly know
//! others in their own segment.

use serde::Serialize;
use tracing::instrument;
use warmpath_core::{Contact, Relationship};

use crate::graph::index_contacts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HomophilyBand {
    High,
    Moderate,
    Low,
}

impl HomophilyBand {
    /// `> 0.7` high, `> 0.5` moderate, otherwise low.
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        if index > 0.7 {
            Self::High
        } else if index > 0.5 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn interpretation(self) -> &'static str {
        match self {
            Self::High => "High homophily - network is clustered, seek cross-category connections",
            Self::Moderate => "Moderate homophily - balanced network",
            Self::Low => "Low homophily - diverse network, good for information flow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomophilySummary {
    pub homophily_index: f64,
    pub same_category_connections: usize,
    pub cross_category_connections: usize,
    pub band: HomophilyBand,
    pub interpretation: &'static str,
}

#[must_use]
#[instrument(skip_all, fields(relationships = relationships.len()))]
#[allow(clippy::cast_precision_loss)]
pub fn homophily(relationships: &[Relationship], contacts: &[Contact]) -> HomophilySummary {
    let index = index_contacts(contacts);

    let mut same = 0usize;
    let mut cross = 0usize;
    for rel in relationships {
        let (Some(a), Some(b)) = (index.get(rel.a.as_str()), index.get(rel.b.as_str())) else {
            continue;
        };
        if a.category == b.category {
            same += 1;
        } else {
            cross += 1;
        }
    }

    let total = same + cross;
    let homophily_index = if total == 0 {
        0.0
    } else {
        same as f64 / total as f64
    };
    let band = HomophilyBand::from_index(homophily_index);

    HomophilySummary {
        homophily_index,
        same_category_connections: same,
        cross_category_connections: cross,
        band,
        interpretation: band.interpretation(),
    }
}
