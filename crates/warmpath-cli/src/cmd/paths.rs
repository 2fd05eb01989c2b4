//! `wp reach|paths|mutual` — breadth-first path queries.

use clap::Args;
use warmpath_graph::{mutual_connections, reach, warm_intro_paths_limited};

use super::{Context, label};
use crate::output::{pretty_kv, pretty_rule, pretty_section, render_mode};

/// Arguments for `wp reach`.
#[derive(Args, Debug)]
pub struct ReachArgs {
    /// Contact to start from.
    pub id: String,

    /// Maximum hop count (default from config, normally 2).
    #[arg(long)]
    pub degrees: Option<usize>,
}

/// Arguments for `wp paths`.
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Contact you want to be introduced to.
    pub target: String,

    /// Longest chain to consider (default from config, normally 2).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Number of paths to show (default from config, normally 10).
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for `wp mutual`.
#[derive(Args, Debug)]
pub struct MutualArgs {
    pub a: String,
    pub b: String,
}

pub fn run_reach(args: &ReachArgs, ctx: &Context) -> anyhow::Result<()> {
    let source = ctx.require_contact(&args.id)?;
    let degrees = args.degrees.unwrap_or(ctx.config.paths.reach_degrees);
    let result = reach(&args.id, degrees, &ctx.graph(), &ctx.snapshot.contacts);

    render_mode(
        ctx.output,
        &result,
        |result, w| {
            writeln!(w, "id\tname\thops")?;
            for r in &result.contacts {
                writeln!(w, "{}\t{}\t{}", r.contact.id, r.contact.name, r.hops)?;
            }
            Ok(())
        },
        |result, w| {
            pretty_section(w, &format!("Reach of {}", label(&source.name, &source.company)))?;
            pretty_kv(w, "Degrees", result.degrees.to_string())?;
            pretty_kv(w, "Total reach", result.total_reach.to_string())?;
            pretty_rule(w)?;
            for r in &result.contacts {
                writeln!(w, "  [{}] {}", r.hops, label(&r.contact.name, &r.contact.company))?;
            }
            Ok(())
        },
    )
}

pub fn run_paths(args: &PathsArgs, ctx: &Context) -> anyhow::Result<()> {
    let target = ctx.require_contact(&args.target)?;
    let max_depth = args.max_depth.unwrap_or(ctx.config.paths.max_depth);
    let limit = args.limit.unwrap_or(ctx.config.paths.max_results);
    let records = warm_intro_paths_limited(
        &args.target,
        max_depth,
        limit,
        &ctx.graph(),
        &ctx.snapshot.contacts,
    );

    render_mode(
        ctx.output,
        &records,
        |records, w| {
            writeln!(w, "degrees\tstrength\tpath")?;
            for r in records {
                let ids: Vec<&str> = r.path.iter().map(|c| c.id.as_str()).collect();
                writeln!(w, "{}\t{:.2}\t{}", r.degrees, r.strength, ids.join(","))?;
            }
            Ok(())
        },
        |records, w| {
            pretty_section(w, &format!("Warm intro paths to {}", label(&target.name, &target.company)))?;
            if records.is_empty() {
                writeln!(w, "No paths within {max_depth} hops.")?;
            }
            for (rank, r) in records.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}. {}  ({} hops, strength {:.2})",
                    rank + 1,
                    r.display_chain(),
                    r.degrees,
                    r.strength
                )?;
            }
            Ok(())
        },
    )
}

pub fn run_mutual(args: &MutualArgs, ctx: &Context) -> anyhow::Result<()> {
    let a = ctx.require_contact(&args.a)?;
    let b = ctx.require_contact(&args.b)?;
    let shared = mutual_connections(&args.a, &args.b, &ctx.graph(), &ctx.snapshot.contacts);

    render_mode(
        ctx.output,
        &shared,
        |shared, w| {
            for c in shared {
                writeln!(w, "{}\t{}\t{}", c.id, c.name, c.company)?;
            }
            Ok(())
        },
        |shared, w| {
            pretty_section(w, &format!("Mutual connections of {} and {}", a.name, b.name))?;
            if shared.is_empty() {
                writeln!(w, "None.")?;
            }
            for c in shared {
                writeln!(w, "  {}", label(&c.name, &c.company))?;
            }
            Ok(())
        },
    )
}
