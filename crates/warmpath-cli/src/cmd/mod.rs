//! Command handlers.
//!
//! Each handler takes the loaded [`Context`], runs one analysis, and renders
//! it through [`crate::output`]. Handlers never compute metrics themselves.

pub mod export;
pub mod metrics;
pub mod opportunities;
pub mod paths;
pub mod report;
pub mod ties;

use std::path::Path;

use tracing::debug;
use warmpath_core::config::WarmpathConfig;
use warmpath_core::error::ErrorCode;
use warmpath_core::{Contact, Snapshot};
use warmpath_graph::{ContactGraph, build_graph_known};

use crate::output::{CliError, OutputMode, render_error};

/// Everything a command needs: the snapshot, effective config, and output mode.
pub struct Context {
    pub snapshot: Snapshot,
    pub config: WarmpathConfig,
    pub output: OutputMode,
}

impl Context {
    /// Load the snapshot from `data_dir`, rendering a coded error on failure.
    pub fn load(data_dir: &Path, config: WarmpathConfig, output: OutputMode) -> anyhow::Result<Self> {
        match Snapshot::load(data_dir) {
            Ok(snapshot) => Ok(Self {
                snapshot,
                config,
                output,
            }),
            Err(err) => {
                render_error(output, &CliError::from_code(err.code(), err.to_string()))?;
                Err(anyhow::Error::new(err)
                    .context(format!("failed to load snapshot from {}", data_dir.display())))
            }
        }
    }

    /// Graph over relationships between known contacts.
    pub fn graph(&self) -> ContactGraph {
        let graph = build_graph_known(&self.snapshot.relationships, &self.snapshot.contacts);
        debug!(nodes = graph.node_count(), edges = graph.edge_count(), "graph ready");
        graph
    }

    /// Look up a contact, rendering `E2001` when it does not exist.
    pub fn require_contact(&self, id: &str) -> anyhow::Result<&Contact> {
        if let Some(contact) = self.snapshot.contact(id) {
            return Ok(contact);
        }
        render_error(
            self.output,
            &CliError::from_code(ErrorCode::ContactNotFound, format!("contact '{id}' not found")),
        )?;
        anyhow::bail!("contact '{id}' not found")
    }
}

/// Name with company in parentheses when known.
pub fn label(contact_name: &str, company: &str) -> String {
    if company.is_empty() {
        contact_name.to_owned()
    } else {
        format!("{contact_name} ({company})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_omits_empty_company() {
        assert_eq!(label("Ann", ""), "Ann");
        assert_eq!(label("Ann", "Acme"), "Ann (Acme)");
    }
}
