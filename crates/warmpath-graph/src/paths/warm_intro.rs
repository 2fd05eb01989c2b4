//! Warm-introduction path search.
//!
//! # Algorithm
//!
//! BFS seeded at the **target** and walking outward. Queue entries are
//! `(path, depth)`:
//!
//! 1. Pop an entry. Skip it if its last contact was already expanded or
//!    `depth >= max_depth`.
//! 2. For every neighbor `n` of the last contact that is not already on the
//!    path, record `path + [n]` as a candidate and enqueue it when
//!    `depth + 1 < max_depth`.
//!
//! Candidates are rendered introducer-first (reverse of discovery), unknown
//! IDs are dropped, and only chains with at least two known contacts are
//! kept. Ranking: fewest hops first, then strongest final hop.
//!
//! The "expanded" check is per contact, not per path, so a contact reachable
//! along several chains is only expanded along the first one dequeued.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, instrument};
use warmpath_core::Contact;

use crate::graph::{ContactGraph, index_contacts};

/// Number of paths returned by [`warm_intro_paths`].
pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRecord {
    /// Known contacts from the introducer to the target.
    pub path: Vec<Contact>,
    /// Hop count of the discovered chain.
    pub degrees: usize,
    /// Strength of the edge that extended the chain to the introducer.
    pub strength: f64,
}

impl PathRecord {
    /// The contact who would make the first introduction.
    #[must_use]
    pub fn introducer(&self) -> Option<&Contact> {
        self.path.first()
    }

    /// Names joined with arrows, e.g. `Ann → Hal → Cy`.
    #[must_use]
    pub fn display_chain(&self) -> String {
        self.path
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Top ten warm-intro paths to `target` of at most `max_depth` hops.
#[must_use]
pub fn warm_intro_paths(
    target: &str,
    max_depth: usize,
    graph: &ContactGraph,
    contacts: &[Contact],
) -> Vec<PathRecord> {
    warm_intro_paths_limited(target, max_depth, DEFAULT_MAX_RESULTS, graph, contacts)
}

/// Same as [`warm_intro_paths`] with an explicit result limit.
#[must_use]
#[instrument(skip(graph, contacts))]
pub fn warm_intro_paths_limited(
    target: &str,
    max_depth: usize,
    max_results: usize,
    graph: &ContactGraph,
    contacts: &[Contact],
) -> Vec<PathRecord> {
    let index = index_contacts(contacts);

    let mut expanded: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(Vec<&str>, usize)> = VecDeque::new();
    queue.push_back((vec![target], 0));

    let mut records = Vec::new();
    let mut candidates = 0usize;

    while let Some((path, depth)) = queue.pop_front() {
        let Some(&current) = path.last() else {
            continue;
        };
        if depth >= max_depth || !expanded.insert(current) {
            continue;
        }

        for neighbor in graph.neighbors(current) {
            let id = neighbor.id.as_str();
            if path.contains(&id) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(id);
            candidates += 1;

            let rendered: Vec<Contact> = extended
                .iter()
                .rev()
                .filter_map(|step| index.get(step).map(|c| (*c).clone()))
                .collect();
            if rendered.len() > 1 {
                records.push(PathRecord {
                    path: rendered,
                    degrees: extended.len() - 1,
                    strength: neighbor.strength,
                });
            }

            if depth + 1 < max_depth {
                queue.push_back((extended, depth + 1));
            }
        }
    }

    records.sort_by(|a, b| {
        a.degrees
            .cmp(&b.degrees)
            .then_with(|| b.strength.total_cmp(&a.strength))
    });
    records.truncate(max_results);

    debug!(candidates, returned = records.len(), "warm intro paths ranked");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use warmpath_core::Relationship;

    fn contacts(ids: &[&str]) -> Vec<Contact> {
        ids.iter()
            .map(|id| Contact::new(*id, id.to_uppercase(), "", "", 1))
            .collect()
    }

    fn ids(record: &PathRecord) -> Vec<&str> {
        record.path.iter().map(|c| c.id.as_str()).collect()
    }

    fn star() -> ContactGraph {
        build_graph(&[
            Relationship::new("h", "a", 0.9),
            Relationship::new("h", "b", 0.4),
            Relationship::new("h", "c", 0.6),
        ])
    }

    #[test]
    fn star_paths_to_a_leaf() {
        let records = warm_intro_paths("c", 2, &star(), &contacts(&["h", "a", "b", "c"]));

        let chains: Vec<Vec<&str>> = records.iter().map(ids).collect();
        assert_eq!(chains, [vec!["h", "c"], vec!["a", "h", "c"], vec!["b", "h", "c"]]);
        assert_eq!(records[0].degrees, 1);
        assert_eq!(records[1].degrees, 2);
        assert!((records[1].strength - 0.9).abs() < f64::EPSILON);
        assert_eq!(records[1].display_chain(), "A → H → C");
    }

    #[test]
    fn depth_one_only_returns_direct_neighbors() {
        let records = warm_intro_paths("c", 1, &star(), &contacts(&["h", "a", "b", "c"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].introducer().map(|c| c.id.as_str()), Some("h"));
    }

    #[test]
    fn zero_depth_or_unknown_target_is_empty() {
        let cs = contacts(&["h", "a", "b", "c"]);
        assert!(warm_intro_paths("c", 0, &star(), &cs).is_empty());
        assert!(warm_intro_paths("nobody", 3, &star(), &cs).is_empty());
    }

    #[test]
    fn unknown_contacts_are_dropped_from_rendering() {
        let graph = build_graph(&[
            Relationship::new("t", "ghost", 0.5),
            Relationship::new("ghost", "x", 0.7),
        ]);
        let records = warm_intro_paths("t", 2, &graph, &contacts(&["t", "x"]));
        // t-ghost renders to a single contact and is discarded.
        assert_eq!(records.len(), 1);
        assert_eq!(ids(&records[0]), ["x", "t"]);
        assert_eq!(records[0].degrees, 2);
    }

    #[test]
    fn equal_hops_rank_by_strength() {
        let graph = build_graph(&[
            Relationship::new("t", "weak", 0.2),
            Relationship::new("t", "strong", 0.8),
        ]);
        let records = warm_intro_paths("t", 1, &graph, &contacts(&["t", "weak", "strong"]));
        assert_eq!(ids(&records[0]), ["strong", "t"]);
    }

    #[test]
    fn limit_truncates() {
        let records = warm_intro_paths_limited("c", 2, 2, &star(), &contacts(&["h", "a", "b", "c"]));
        assert_eq!(records.len(), 2);
    }
}
