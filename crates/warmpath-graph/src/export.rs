//! Graph export for visualization tools.
//!
//! Produces a serde-serializable node/edge listing. The timestamp is passed
//! in so the export itself never reads the clock.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use warmpath_core::{Contact, ContactId, Relationship};

use crate::graph::index_contacts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportNode {
    pub id: ContactId,
    pub name: String,
    pub company: String,
    pub tier: u32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportEdge {
    pub source: ContactId,
    pub target: ContactId,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportMetadata {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
    pub metadata: ExportMetadata,
}

/// Every contact as a node and every relationship between known contacts as
/// an edge.
#[must_use]
#[instrument(skip(contacts, relationships))]
pub fn export_graph(
    contacts: &[Contact],
    relationships: &[Relationship],
    generated_at: DateTime<Utc>,
) -> GraphExport {
    let index = index_contacts(contacts);

    let nodes: Vec<ExportNode> = contacts
        .iter()
        .map(|c| ExportNode {
            id: c.id.clone(),
            name: c.name.clone(),
            company: c.company.clone(),
            tier: c.tier,
            category: c.category.clone(),
        })
        .collect();

    let edges: Vec<ExportEdge> = relationships
        .iter()
        .filter(|rel| index.contains_key(rel.a.as_str()) && index.contains_key(rel.b.as_str()))
        .map(|rel| ExportEdge {
            source: rel.a.clone(),
            target: rel.b.clone(),
            strength: rel.strength,
        })
        .collect();

    GraphExport {
        metadata: ExportMetadata {
            total_nodes: nodes.len(),
            total_edges: edges.len(),
            generated_at,
        },
        nodes,
        edges,
    }
}
