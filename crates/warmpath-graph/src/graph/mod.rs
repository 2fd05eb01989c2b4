//! Undirected relationship graph.
//!
//! # Overview
//!
//! The graph is a plain adjacency mapping built from the flat relationship
//! collection; no graph library is involved. Every record is inserted in
//! both directions, so each endpoint lists the other with the same
//! strength. All metrics read the same [`ContactGraph`] read-only.
//!
//! ```text
//! relationships.json
//!        ↓  build::build_graph() / build::build_graph_known()
//! ContactGraph (id → [{neighbor, strength}], insertion ordered)
//!        ↓
//! metrics::{degree, broker, constraint, influence}, paths, opportunities
//! ```
//!
//! Contacts with no relationships are absent from the mapping. Every
//! accessor treats a missing key as degree 0.

pub mod build;

use std::collections::HashMap;

use warmpath_core::Contact;

pub use build::{ContactGraph, Neighbor, build_graph, build_graph_known};

/// Map contact IDs to their records. The first record wins on duplicate IDs.
pub(crate) fn index_contacts(contacts: &[Contact]) -> HashMap<&str, &Contact> {
    let mut index = HashMap::with_capacity(contacts.len());
    for contact in contacts {
        index.entry(contact.id.as_str()).or_insert(contact);
    }
    index
}
