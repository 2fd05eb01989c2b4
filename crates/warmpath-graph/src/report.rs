//! Aggregate network report.
//!
//! Builds the graph once from a [`Snapshot`] and collects the headline
//! rankings: top multipliers, structural holes, brokers, influence, and the
//! homophily summary.

use serde::Serialize;
use tracing::{info, instrument};
use warmpath_core::Snapshot;
use warmpath_core::config::WarmpathConfig;

use crate::graph::build_graph_known;
use crate::homophily::{HomophilySummary, homophily};
use crate::metrics::broker::{BrokerRecord, broker_scores};
use crate::metrics::constraint::{ConstraintRecord, structural_holes};
use crate::metrics::influence::{InfluenceRecord, influence_scores};
use crate::score::multiplier::{MultiplierRecord, network_multipliers};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkReport {
    pub total_contacts: usize,
    pub total_relationships: usize,
    pub multipliers: Vec<MultiplierRecord>,
    pub structural_holes: Vec<ConstraintRecord>,
    pub brokers: Vec<BrokerRecord>,
    pub influence: Vec<InfluenceRecord>,
    pub homophily: HomophilySummary,
}

#[must_use]
#[instrument(skip_all, fields(contacts = snapshot.contacts.len()))]
pub fn network_report(snapshot: &Snapshot, config: &WarmpathConfig) -> NetworkReport {
    let contacts = &snapshot.contacts;
    let graph = build_graph_known(&snapshot.relationships, contacts);
    let top = config.report.top_section;

    let mut multipliers = network_multipliers(contacts, &graph, &config.multiplier, &config.influence);
    multipliers.truncate(config.report.top_multipliers);

    let mut holes = structural_holes(contacts, &graph);
    holes.truncate(top);

    let mut brokers = broker_scores(contacts, &graph);
    brokers.truncate(top);

    let mut influence = influence_scores(contacts, &graph, &config.influence).records;
    influence.truncate(top);

    let report = NetworkReport {
        total_contacts: contacts.len(),
        total_relationships: graph.edge_count(),
        multipliers,
        structural_holes: holes,
        brokers,
        influence,
        homophily: homophily(&snapshot.relationships, contacts),
    };

    info!(
        multipliers = report.multipliers.len(),
        homophily = report.homophily.homophily_index,
        "network report built"
    );
    report
}
