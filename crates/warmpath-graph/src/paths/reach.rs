//! N-degree reach.
//!
//! Standard BFS from the source, visiting each contact at most once and
//! stopping at `degrees` hops. Contacts exactly `degrees` hops away are
//! included. IDs missing from the contact collection are walked through
//! but not reported.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, instrument};
use warmpath_core::{Contact, ContactId};

use crate::graph::{ContactGraph, index_contacts};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachedContact {
    pub contact: Contact,
    /// Shortest hop count from the source.
    pub hops: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachResult {
    pub source: ContactId,
    pub degrees: usize,
    pub total_reach: usize,
    /// Reached contacts in discovery order.
    pub contacts: Vec<ReachedContact>,
}

#[must_use]
#[instrument(skip(graph, contacts))]
pub fn reach(source: &str, degrees: usize, graph: &ContactGraph, contacts: &[Contact]) -> ReachResult {
    let index = index_contacts(contacts);

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
    let mut reached = Vec::new();

    visited.insert(source);
    queue.push_back((source, 0));

    while let Some((current, hops)) = queue.pop_front() {
        if hops >= degrees {
            continue;
        }
        for neighbor in graph.neighbors(current) {
            let id = neighbor.id.as_str();
            if !visited.insert(id) {
                continue;
            }
            if let Some(contact) = index.get(id) {
                reached.push(ReachedContact {
                    contact: (*contact).clone(),
                    hops: hops + 1,
                });
            }
            queue.push_back((id, hops + 1));
        }
    }

    debug!(reached = reached.len(), "reach computed");

    ReachResult {
        source: ContactId::new(source),
        degrees,
        total_reach: reached.len(),
        contacts: reached,
    }
}
