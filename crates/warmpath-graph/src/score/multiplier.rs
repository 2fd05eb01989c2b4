//! Network-multiplier score.
//!
//! A network multiplier is a contact worth asking for introductions: they
//! bridge groups that do not otherwise talk, their ties are non-redundant,
//! and they sit close to other influential people. The score blends the
//! three component metrics:
//!
//! ```text
//! M(v) = broker·B(v) + holes·H(v) + influence·(I(v) / influence_scale)
//! ```
//!
//! With the default [`MultiplierWeights`] this is
//! `0.4·B + 0.4·H + 0.2·(I / 5)`, and only contacts scoring above `0.1` are
//! reported.

use serde::Serialize;
use tracing::{debug, instrument};
use warmpath_core::config::{InfluenceConfig, MultiplierWeights};
use warmpath_core::{Contact, ContactId};

use crate::graph::ContactGraph;
use crate::metrics::broker::broker_score;
use crate::metrics::constraint::constraint;
use crate::metrics::influence::power_iteration;

pub const REASON_BROKER: &str = "Bridges disconnected groups (broker)";
pub const REASON_HOLES: &str = "Access to non-redundant networks";
pub const REASON_INFLUENCE: &str = "Connected to influential people";
pub const REASON_DEVELOPING: &str = "Developing network position";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiplierRecord {
    pub id: ContactId,
    pub name: String,
    pub company: String,
    pub tier: u32,
    pub multiplier_score: f64,
    pub broker_score: f64,
    pub structural_holes_access: f64,
    pub influence_score: f64,
    pub reasons: Vec<&'static str>,
    /// `reasons` joined with ", ".
    pub why_valuable: String,
}

/// Weighted composite of the three component scores.
#[must_use]
pub fn multiplier_score(broker: f64, holes: f64, influence: f64, weights: &MultiplierWeights) -> f64 {
    let scaled_influence = if weights.influence_scale > 0.0 {
        influence / weights.influence_scale
    } else {
        0.0
    };

    (weights.broker * broker) + (weights.holes * holes) + (weights.influence * scaled_influence)
}

/// Why a contact is valuable, from fixed component thresholds.
#[must_use]
pub fn explain(broker: f64, holes: f64, influence: f64) -> Vec<&'static str> {
    let mut reasons = Vec::with_capacity(3);
    if broker > 0.5 {
        reasons.push(REASON_BROKER);
    }
    if holes > 0.6 {
        reasons.push(REASON_HOLES);
    }
    if influence > 2.0 {
        reasons.push(REASON_INFLUENCE);
    }
    if reasons.is_empty() {
        reasons.push(REASON_DEVELOPING);
    }
    reasons
}

/// Score every contact with at least one neighbor and report those above
/// the threshold, ranked by multiplier score (descending).
#[must_use]
#[instrument(skip_all, fields(contacts = contacts.len()))]
pub fn network_multipliers(
    contacts: &[Contact],
    graph: &ContactGraph,
    weights: &MultiplierWeights,
    influence: &InfluenceConfig,
) -> Vec<MultiplierRecord> {
    let (influence_scores, _, _) = power_iteration(contacts, graph, influence);

    let mut records: Vec<MultiplierRecord> = contacts
        .iter()
        .zip(influence_scores)
        .filter_map(|(contact, influence_score)| {
            let id = contact.id.as_str();
            let holes = 1.0 - constraint(graph, id)?;
            let broker = broker_score(graph, id);
            let score = multiplier_score(broker, holes, influence_score, weights);
            if score <= weights.threshold {
                return None;
            }

            let reasons = explain(broker, holes, influence_score);
            Some(MultiplierRecord {
                id: contact.id.clone(),
                name: contact.name.clone(),
                company: contact.company.clone(),
                tier: contact.tier,
                multiplier_score: score,
                broker_score: broker,
                structural_holes_access: holes,
                influence_score,
                why_valuable: reasons.join(", "),
                reasons,
            })
        })
        .collect();

    records.sort_by(|a, b| b.multiplier_score.total_cmp(&a.multiplier_score));

    debug!(multipliers = records.len(), "network multipliers ranked");
    records
}
