//! `wp export` — nodes and edges as JSON for visualization tools.
//!
//! Without `--output` the export goes to stdout as JSON regardless of the
//! output mode. With `--output` the file receives the JSON and stdout gets a
//! short summary in the requested mode.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use clap::Args;
use tracing::info;
use warmpath_core::error::ErrorCode;
use warmpath_graph::export_graph;

use super::Context;
use crate::output::{CliError, pretty_kv, pretty_section, render_error, render_mode};

/// Arguments for `wp export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write the export to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run_export(args: &ExportArgs, ctx: &Context) -> anyhow::Result<()> {
    let export = export_graph(
        &ctx.snapshot.contacts,
        &ctx.snapshot.relationships,
        Utc::now(),
    );
    let json = serde_json::to_string_pretty(&export)?;

    let Some(path) = &args.output else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{json}")?;
        return Ok(());
    };

    if let Err(err) = fs::write(path, format!("{json}\n")) {
        render_error(
            ctx.output,
            &CliError::from_code(
                ErrorCode::ExportWriteFailed,
                format!("failed to write {}: {err}", path.display()),
            ),
        )?;
        return Err(err).with_context(|| format!("failed to write export to {}", path.display()));
    }
    info!(path = %path.display(), nodes = export.metadata.total_nodes, "graph exported");

    render_mode(
        ctx.output,
        &export.metadata,
        |meta, w| writeln!(w, "{}\t{}\t{}", path.display(), meta.total_nodes, meta.total_edges),
        |meta, w| {
            pretty_section(w, "Graph export")?;
            pretty_kv(w, "File", path.display().to_string())?;
            pretty_kv(w, "Nodes", meta.total_nodes.to_string())?;
            pretty_kv(w, "Edges", meta.total_edges.to_string())?;
            pretty_kv(w, "Generated", meta.generated_at.to_rfc3339())
        },
    )
}
