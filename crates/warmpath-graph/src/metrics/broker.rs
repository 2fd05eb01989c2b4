//! Broker score: ego-network bridge counting.
//!
//! # Algorithm
//!
//! For contact `i` with neighbor list `N(i)`, every unordered pair of list
//! positions `{j, k}` counts as a *bridge* when `k ∉ N(j)`, i.e. `i` knows
//! two people who do not know each other:
//!
//! ```text
//! bridges(i)      = |{ {j, k} ⊆ N(i) : k ∉ N(j) }|
//! broker_score(i) = bridges(i) / |N(i)|          (0 when N(i) is empty)
//! ```
//!
//! This only looks at the depth-1 neighborhood. It approximates how much
//! brokerage a contact offers; it is **not** shortest-path betweenness.
//!
//! Complexity: O(d²) per contact with degree `d`.

use serde::Serialize;
use tracing::instrument;
use warmpath_core::{Contact, ContactId};

use crate::graph::ContactGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrokerRecord {
    pub id: ContactId,
    pub name: String,
    pub company: String,
    /// Neighbor pairs that are not adjacent to each other.
    pub bridges: usize,
    pub broker_score: f64,
}

/// Count the non-adjacent neighbor pairs of `id`.
#[must_use]
pub fn count_bridges(graph: &ContactGraph, id: &str) -> usize {
    let neighbors = graph.neighbors(id);
    let mut bridges = 0;

    for (pos, j) in neighbors.iter().enumerate() {
        for k in &neighbors[pos + 1..] {
            if !graph.is_adjacent(j.id.as_str(), k.id.as_str()) {
                bridges += 1;
            }
        }
    }

    bridges
}

/// `bridges / degree`, or 0 for a contact without neighbors.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn broker_score(graph: &ContactGraph, id: &str) -> f64 {
    let degree = graph.degree(id);
    if degree == 0 {
        return 0.0;
    }
    count_bridges(graph, id) as f64 / degree as f64
}

/// Broker score of every contact, ranked by bridge count (descending).
#[must_use]
#[instrument(skip_all, fields(contacts = contacts.len()))]
#[allow(clippy::cast_precision_loss)]
pub fn broker_scores(contacts: &[Contact], graph: &ContactGraph) -> Vec<BrokerRecord> {
    let mut records: Vec<BrokerRecord> = contacts
        .iter()
        .map(|contact| {
            let id = contact.id.as_str();
            let degree = graph.degree(id);
            let bridges = count_bridges(graph, id);
            let broker_score = if degree == 0 {
                0.0
            } else {
                bridges as f64 / degree as f64
            };

            BrokerRecord {
                id: contact.id.clone(),
                name: contact.name.clone(),
                company: contact.company.clone(),
                bridges,
                broker_score,
            }
        })
        .collect();

    records.sort_by(|a, b| b.bridges.cmp(&a.bridges));
    records
}
