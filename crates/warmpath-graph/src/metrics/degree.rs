//! Degree centrality: direct connection counts.

use serde::Serialize;
use tracing::instrument;
use warmpath_core::{Contact, ContactId};

use crate::graph::ContactGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeRecord {
    pub id: ContactId,
    pub name: String,
    pub company: String,
    pub degree: usize,
    /// `degree / max(1, N - 1)` where `N` is the contact count.
    pub normalized_degree: f64,
}

/// Degree of every contact, ranked by raw degree (descending).
#[must_use]
#[instrument(skip_all, fields(contacts = contacts.len()))]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(contacts: &[Contact], graph: &ContactGraph) -> Vec<DegreeRecord> {
    let denominator = contacts.len().saturating_sub(1).max(1) as f64;

    let mut records: Vec<DegreeRecord> = contacts
        .iter()
        .map(|contact| {
            let degree = graph.degree(contact.id.as_str());
            DegreeRecord {
                id: contact.id.clone(),
                name: contact.name.clone(),
                company: contact.company.clone(),
                degree,
                normalized_degree: degree as f64 / denominator,
            }
        })
        .collect();

    records.sort_by(|a, b| b.degree.cmp(&a.degree));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use warmpath_core::Relationship;

    fn contacts(ids: &[&str]) -> Vec<Contact> {
        ids.iter()
            .map(|id| Contact::new(*id, id.to_uppercase(), "Co", "Cat", 1))
            .collect()
    }

    #[test]
    fn no_contacts_yields_empty_ranking() {
        assert!(degree_centrality(&[], &build_graph(&[])).is_empty());
    }

    #[test]
    fn single_contact_normalizes_by_one() {
        let records = degree_centrality(&contacts(&["a"]), &build_graph(&[]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].degree, 0);
        assert!(records[0].normalized_degree.abs() < f64::EPSILON);
    }

    #[test]
    fn ranking_is_stable_for_equal_degrees() {
        let cs = contacts(&["a", "b", "c", "d"]);
        let graph = build_graph(&[
            Relationship::new("c", "a", 0.5),
            Relationship::new("c", "b", 0.5),
        ]);

        let records = degree_centrality(&cs, &graph);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        // c first; a and b tie at 1 and keep collection order; d last.
        assert_eq!(ids, ["c", "a", "b", "d"]);
        assert!((records[0].normalized_degree - 2.0 / 3.0).abs() < 1e-12);
    }
}
