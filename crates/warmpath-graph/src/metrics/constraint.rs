//! Burt-style network constraint and structural-holes access.
//!
//! # Algorithm
//!
//! Every contact spreads its relational investment evenly across its
//! neighbors, `p_ij = 1 / |N(i)|`. For each neighbor `j`, the mutual
//! neighbors `M = N(i) ∩ N(j) \ {i}` add indirect constraint:
//!
//! ```text
//! indirect_j     = Σ_{m ∈ M} p_im · 1/|N(m)|      with p_im = 1/|N(i)|
//! c_ij           = (p_ij + indirect_j)²
//! constraint(i)  = mean over j ∈ N(i) of c_ij
//! access(i)      = 1 − constraint(i)
//! ```
//!
//! The indirect term weights each intermediary by `i`'s own per-neighbor
//! investment rather than by `j`'s, which departs from the textbook
//! `p_im · p_mj` product. Rankings produced by earlier releases depend on
//! this form, so it is kept as is.
//!
//! Contacts without neighbors have no defined constraint and are left out
//! of the ranking.

use serde::Serialize;
use tracing::instrument;
use warmpath_core::{Contact, ContactId};

use crate::graph::ContactGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintRecord {
    pub id: ContactId,
    pub name: String,
    pub company: String,
    pub constraint: f64,
    /// `1 - constraint`; higher means better access to non-redundant contacts.
    pub structural_holes_access: f64,
    /// Number of direct contacts the constraint was averaged over.
    pub non_redundant_contacts: usize,
}

/// Network constraint of `id`, or `None` when it has no neighbors.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn constraint(graph: &ContactGraph, id: &str) -> Option<f64> {
    let neighbors = graph.neighbors(id);
    if neighbors.is_empty() {
        return None;
    }

    let degree = neighbors.len() as f64;
    let investment = 1.0 / degree;

    // N(i) as a set, in adjacency order, without i itself.
    let mut ego: Vec<&str> = Vec::with_capacity(neighbors.len());
    for neighbor in neighbors {
        let nid = neighbor.id.as_str();
        if nid != id && !ego.contains(&nid) {
            ego.push(nid);
        }
    }

    let total: f64 = neighbors
        .iter()
        .map(|j| {
            let indirect: f64 = ego
                .iter()
                .filter(|m| graph.is_adjacent(j.id.as_str(), m))
                .map(|m| investment * (1.0 / graph.degree(m).max(1) as f64))
                .sum();
            (investment + indirect).powi(2)
        })
        .sum();

    Some(total / degree)
}

/// Constraint and structural-holes access for every contact with at least
/// one neighbor, ranked by access (descending).
#[must_use]
#[instrument(skip_all, fields(contacts = contacts.len()))]
pub fn structural_holes(contacts: &[Contact], graph: &ContactGraph) -> Vec<ConstraintRecord> {
    let mut records: Vec<ConstraintRecord> = contacts
        .iter()
        .filter_map(|contact| {
            let id = contact.id.as_str();
            let value = constraint(graph, id)?;
            Some(ConstraintRecord {
                id: contact.id.clone(),
                name: contact.name.clone(),
                company: contact.company.clone(),
                constraint: value,
                structural_holes_access: 1.0 - value,
                non_redundant_contacts: graph.degree(id),
            })
        })
        .collect();

    records.sort_by(|a, b| {
        b.structural_holes_access
            .total_cmp(&a.structural_holes_access)
    });
    records
}
