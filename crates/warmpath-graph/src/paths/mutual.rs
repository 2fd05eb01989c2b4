//! Mutual connections: direct neighbors shared by two contacts.

use std::collections::HashSet;

use tracing::instrument;
use warmpath_core::Contact;

use crate::graph::{ContactGraph, index_contacts};

/// Contacts adjacent to both `a` and `b`, in `a`'s neighbor order.
///
/// Unknown IDs are dropped. Only direct neighbors are considered.
#[must_use]
#[instrument(skip(graph, contacts))]
pub fn mutual_connections(a: &str, b: &str, graph: &ContactGraph, contacts: &[Contact]) -> Vec<Contact> {
    let index = index_contacts(contacts);
    let of_b: HashSet<&str> = graph.neighbors(b).iter().map(|n| n.id.as_str()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    graph
        .neighbors(a)
        .iter()
        .map(|n| n.id.as_str())
        .filter(|id| of_b.contains(id) && seen.insert(*id))
        .filter_map(|id| index.get(id).map(|c| (*c).clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use warmpath_core::Relationship;

    fn contacts(ids: &[&str]) -> Vec<Contact> {
        ids.iter().map(|id| Contact::new(*id, *id, "", "", 1)).collect()
    }

    #[test]
    fn star_leaves_share_the_hub() {
        let graph = build_graph(&[
            Relationship::new("h", "a", 0.5),
            Relationship::new("h", "b", 0.5),
            Relationship::new("h", "c", 0.5),
        ]);
        let cs = contacts(&["h", "a", "b", "c"]);
        let shared = mutual_connections("a", "b", &graph, &cs);
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].id.as_str(), "h");
        assert!(mutual_connections("h", "a", &graph, &cs).is_empty());
    }

    #[test]
    fn keeps_first_contact_order_and_drops_unknown() {
        let graph = build_graph(&[
            Relationship::new("a", "z", 0.5),
            Relationship::new("a", "ghost", 0.5),
            Relationship::new("a", "m", 0.5),
            Relationship::new("b", "m", 0.5),
            Relationship::new("b", "ghost", 0.5),
            Relationship::new("b", "z", 0.5),
        ]);
        let cs = contacts(&["a", "b", "m", "z"]);
        let ids: Vec<String> = mutual_connections("a", "b", &graph, &cs)
            .into_iter()
            .map(|c| c.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["z", "m"]);
    }

    #[test]
    fn unknown_contacts_have_no_mutuals() {
        let graph = build_graph(&[Relationship::new("a", "b", 0.5)]);
        assert!(mutual_connections("x", "y", &graph, &contacts(&["a", "b"])).is_empty());
    }
}
