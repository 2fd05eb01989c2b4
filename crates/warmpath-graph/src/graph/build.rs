//! Graph construction from the relationship collection.
//!
//! # Overview
//!
//! Each [`Relationship`] `(a, b, s)` becomes two adjacency entries:
//! `a → {b, s}` and `b → {a, s}`. Neighbor lists keep record order, which
//! fixes the iteration order of every downstream computation.
//!
//! ## Dangling references
//!
//! [`build_graph`] inserts every record as is. [`build_graph_known`] first
//! drops records whose endpoints are not both in the contact collection;
//! snapshot-level entry points use it so that an export lagging the contact
//! import cannot inflate degrees.
//!
//! ## Self references
//!
//! A record with `a == b` has no meaning in an undirected simple graph and is
//! skipped by both builders. Ingestion rejects such records, so reaching
//! this branch means the caller bypassed validation.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, instrument, warn};
use warmpath_core::{Contact, ContactId, Relationship};

// ---------------------------------------------------------------------------
// ContactGraph
// ---------------------------------------------------------------------------

/// One adjacency entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: ContactId,
    pub strength: f64,
}

/// Undirected adjacency structure over contact IDs.
#[derive(Debug, Clone, Default)]
pub struct ContactGraph {
    /// contact → neighbors, in relationship-record order.
    adjacency: HashMap<ContactId, Vec<Neighbor>>,
    /// contact → neighbor set, for O(1) adjacency tests.
    membership: HashMap<ContactId, HashSet<ContactId>>,
    /// Number of relationship records inserted.
    edge_count: usize,
}

impl ContactGraph {
    fn insert(&mut self, rel: &Relationship) {
        self.push_half(&rel.a, &rel.b, rel.strength);
        self.push_half(&rel.b, &rel.a, rel.strength);
        self.edge_count += 1;
    }

    fn push_half(&mut self, from: &ContactId, to: &ContactId, strength: f64) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(Neighbor {
                id: to.clone(),
                strength,
            });
        self.membership
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
    }

    /// Neighbors of `id` in insertion order; empty when `id` has no edges.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of adjacency entries for `id` (0 when absent).
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    /// Whether `b` appears in `a`'s neighbor list.
    #[must_use]
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.membership.get(a).is_some_and(|set| set.contains(b))
    }

    /// Whether `id` has at least one relationship.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of contacts with at least one relationship.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of relationship records in the graph.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Read-only view of the adjacency mapping.
    #[must_use]
    pub const fn adjacency(&self) -> &HashMap<ContactId, Vec<Neighbor>> {
        &self.adjacency
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the undirected graph from every relationship record.
#[must_use]
#[instrument(skip_all, fields(relationships = relationships.len()))]
pub fn build_graph(relationships: &[Relationship]) -> ContactGraph {
    build_filtered(relationships, |_| true)
}

/// Build the graph from relationships whose endpoints are both known
/// contacts. Other records are skipped.
#[must_use]
#[instrument(skip_all, fields(relationships = relationships.len(), contacts = contacts.len()))]
pub fn build_graph_known(relationships: &[Relationship], contacts: &[Contact]) -> ContactGraph {
    let known: HashSet<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
    build_filtered(relationships, |rel| {
        known.contains(rel.a.as_str()) && known.contains(rel.b.as_str())
    })
}

fn build_filtered(
    relationships: &[Relationship],
    keep: impl Fn(&Relationship) -> bool,
) -> ContactGraph {
    let mut graph = ContactGraph::default();
    let mut skipped_unknown = 0usize;

    for rel in relationships {
        if rel.a == rel.b {
            warn!(contact = %rel.a, "skipping self-referencing relationship");
            continue;
        }
        if !keep(rel) {
            skipped_unknown += 1;
            continue;
        }
        graph.insert(rel);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped_unknown,
        "contact graph built"
    );

    graph
}
