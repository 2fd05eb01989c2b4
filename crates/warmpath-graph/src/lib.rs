#![forbid(unsafe_code)]
//! warmpath-graph library.
//!
//! Structural-position analytics over a contact relationship graph. Every
//! entry point is a pure function of the caller's record collections: the
//! graph is rebuilt per run, nothing is cached, and inputs are never
//! mutated.
//!
//! # Conventions
//!
//! - **Errors**: none. Degenerate input produces empty or zero-valued output
//!   and dangling references are skipped.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Ordering**: every ranked output sorts stably, so ties keep the order of
//!   the contact (or relationship) collection and results are reproducible.

pub mod export;
pub mod graph;
pub mod homophily;
pub mod metrics;
pub mod opportunities;
pub mod paths;
pub mod report;
pub mod score;
pub mod ties;

pub use export::{ExportEdge, ExportMetadata, ExportNode, GraphExport, export_graph};
pub use graph::{ContactGraph, Neighbor, build_graph, build_graph_known};
pub use homophily::{HomophilyBand, HomophilySummary, homophily};
pub use metrics::broker::{BrokerRecord, broker_scores};
pub use metrics::constraint::{ConstraintRecord, structural_holes};
pub use metrics::degree::{DegreeRecord, degree_centrality};
pub use metrics::influence::{InfluenceRecord, InfluenceResult, influence_scores};
pub use opportunities::{
    OpportunityRecord, introduction_opportunities, introduction_opportunities_with,
};
pub use paths::mutual::mutual_connections;
pub use paths::reach::{ReachResult, ReachedContact, reach};
pub use paths::warm_intro::{PathRecord, warm_intro_paths, warm_intro_paths_limited};
pub use report::{NetworkReport, network_report};
pub use score::multiplier::{MultiplierRecord, network_multipliers};
pub use ties::{ContactTie, ContactTies, TieClass, TieRecord, contact_ties, tie_strengths};
