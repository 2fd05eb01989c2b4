//! Introduction opportunities: pairs of contacts who should know each other
//! but do not.
//!
//! Every unconnected pair `(i, j)` with `i < j` in collection order is
//! scored:
//!
//! | signal               | points | reason            |
//! |----------------------|--------|-------------------|
//! | same category        | +2     | `Both {category}` |
//! | tiers differ by ≤ 1  | +1     | `Similar tier`    |
//!
//! Pairs reaching `min_score` (default 2) are ranked by score, ties in scan
//! order. The scan is O(N²) in the contact count.

use serde::Serialize;
use tracing::{debug, instrument};
use warmpath_core::config::OpportunityConfig;
use warmpath_core::{Contact, ContactId};

use crate::graph::ContactGraph;

const SAME_CATEGORY_POINTS: u32 = 2;
const SIMILAR_TIER_POINTS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpportunityRecord {
    pub contact_1: ContactId,
    pub contact_2: ContactId,
    pub name_1: String,
    pub name_2: String,
    pub score: u32,
    pub reason: String,
    pub action: String,
}

/// Top 20 pairs scoring at least 2.
#[must_use]
pub fn introduction_opportunities(contacts: &[Contact], graph: &ContactGraph) -> Vec<OpportunityRecord> {
    introduction_opportunities_with(contacts, graph, &OpportunityConfig::default())
}

#[must_use]
#[instrument(skip_all, fields(contacts = contacts.len(), limit = config.limit))]
pub fn introduction_opportunities_with(
    contacts: &[Contact],
    graph: &ContactGraph,
    config: &OpportunityConfig,
) -> Vec<OpportunityRecord> {
    let mut records = Vec::new();

    for (pos, first) in contacts.iter().enumerate() {
        for second in &contacts[pos + 1..] {
            if graph.is_adjacent(first.id.as_str(), second.id.as_str()) {
                continue;
            }

            let mut score = 0;
            let mut reasons: Vec<String> = Vec::with_capacity(2);

            if first.category == second.category {
                score += SAME_CATEGORY_POINTS;
                reasons.push(format!("Both {}", first.category));
            }
            if first.tier.abs_diff(second.tier) <= 1 {
                score += SIMILAR_TIER_POINTS;
                reasons.push("Similar tier".to_owned());
            }

            if score >= config.min_score {
                records.push(OpportunityRecord {
                    contact_1: first.id.clone(),
                    contact_2: second.id.clone(),
                    name_1: first.name.clone(),
                    name_2: second.name.clone(),
                    score,
                    reason: reasons.join(", "),
                    action: format!("Consider introducing {} to {}", first.name, second.name),
                });
            }
        }
    }

    let found = records.len();
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records.truncate(config.limit);

    debug!(found, returned = records.len(), "introduction opportunities ranked");
    records
}
