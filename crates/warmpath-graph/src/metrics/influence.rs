//! Eigenvector-style influence via power iteration.
//!
//! # Overview
//!
//! A contact is influential when it is connected to other influential
//! contacts. Scores propagate along edges, each contact splitting its score
//! evenly among its neighbors:
//!
//! 1. Initialize every contact's score to `1.0`.
//! 2. For each contact `i`: `new(i) = Σ_{j ∈ N(i)} score(j) / |N(j)|`.
//! 3. Rescale so the scores sum to the contact count `N`.
//! 4. Repeat for a fixed number of rounds (default 20).
//!
//! There is no damping factor (this is not PageRank) and, by default, no
//! convergence check: the round count is fixed so that rankings on the same
//! snapshot are reproducible bit for bit. [`InfluenceConfig::tolerance`]
//! enables an opt-in early stop on the L1 change between rounds.
//!
//! Contacts without neighbors drop to 0 after the first round. When the
//! graph has no edges at all every score is 0.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, instrument};
use warmpath_core::config::InfluenceConfig;
use warmpath_core::{Contact, ContactId};

use crate::graph::ContactGraph;

/// Scores above this are labelled "High network influence".
pub const HIGH_INFLUENCE_THRESHOLD: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluenceRecord {
    pub id: ContactId,
    pub name: String,
    pub company: String,
    pub tier: u32,
    pub influence_score: f64,
    pub interpretation: &'static str,
}

/// Result of the influence computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluenceResult {
    /// Records ranked by score (descending).
    pub records: Vec<InfluenceRecord>,
    /// Number of propagation rounds performed.
    pub iterations: usize,
    /// Whether the opt-in tolerance was reached. Always `false` when no
    /// tolerance is configured, since no check is made.
    pub converged: bool,
}

impl InfluenceResult {
    /// Score lookup by contact ID.
    #[must_use]
    pub fn score_map(&self) -> HashMap<&str, f64> {
        self.records
            .iter()
            .map(|r| (r.id.as_str(), r.influence_score))
            .collect()
    }
}

/// Raw score vector aligned with `contacts`, plus rounds run and convergence.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn power_iteration(
    contacts: &[Contact],
    graph: &ContactGraph,
    config: &InfluenceConfig,
) -> (Vec<f64>, usize, bool) {
    let n = contacts.len();
    if n == 0 {
        return (Vec::new(), 0, false);
    }

    let mut position: HashMap<&str, usize> = HashMap::with_capacity(n);
    for (pos, contact) in contacts.iter().enumerate() {
        position.entry(contact.id.as_str()).or_insert(pos);
    }

    // For each contact: (position of neighbor, neighbor degree). Neighbors
    // outside the contact collection carry no score and are skipped.
    let inbound: Vec<Vec<(usize, f64)>> = contacts
        .iter()
        .map(|contact| {
            graph
                .neighbors(contact.id.as_str())
                .iter()
                .filter_map(|nb| {
                    let degree = graph.degree(nb.id.as_str());
                    if degree == 0 {
                        return None;
                    }
                    position
                        .get(nb.id.as_str())
                        .map(|&pos| (pos, degree as f64))
                })
                .collect()
        })
        .collect();

    let count = n as f64;
    let mut scores = vec![1.0_f64; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.iterations {
        iterations += 1;

        let mut next: Vec<f64> = inbound
            .iter()
            .map(|edges| {
                edges
                    .iter()
                    .fold(0.0, |acc, &(pos, degree)| acc + scores[pos] / degree)
            })
            .collect();

        let total: f64 = next.iter().fold(0.0, |acc, x| acc + x);
        if total > 0.0 {
            for score in &mut next {
                *score = *score / total * count;
            }
        }

        let delta: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        scores = next;

        if config.tolerance.is_some_and(|tol| delta < tol) {
            converged = true;
            break;
        }
    }

    (scores, iterations, converged)
}

/// Influence score of every contact, ranked descending.
#[must_use]
#[instrument(skip_all, fields(contacts = contacts.len(), iterations = config.iterations))]
pub fn influence_scores(
    contacts: &[Contact],
    graph: &ContactGraph,
    config: &InfluenceConfig,
) -> InfluenceResult {
    let (scores, iterations, converged) = power_iteration(contacts, graph, config);

    debug!(iterations, converged, "influence power iteration finished");

    let mut records: Vec<InfluenceRecord> = contacts
        .iter()
        .zip(scores)
        .map(|(contact, influence_score)| InfluenceRecord {
            id: contact.id.clone(),
            name: contact.name.clone(),
            company: contact.company.clone(),
            tier: contact.tier,
            influence_score,
            interpretation: if influence_score > HIGH_INFLUENCE_THRESHOLD {
                "High network influence"
            } else {
                "Standard influence"
            },
        })
        .collect();

    records.sort_by(|a, b| b.influence_score.total_cmp(&a.influence_score));

    InfluenceResult {
        records,
        iterations,
        converged,
    }
}
