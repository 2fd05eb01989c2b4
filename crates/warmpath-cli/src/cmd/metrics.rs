//! `wp degree|brokers|holes|influence|multipliers` — per-contact rankings.

use clap::Args;
use warmpath_graph::{
    broker_scores, degree_centrality, influence_scores, network_multipliers, structural_holes,
};

use super::{Context, label};
use crate::output::{pretty_kv, pretty_rule, pretty_section, render_mode};

/// Arguments for `wp influence`.
#[derive(Args, Debug)]
pub struct InfluenceArgs {
    /// Number of propagation rounds (default from config, normally 20).
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Stop early once the L1 change between rounds drops below this.
    #[arg(long)]
    pub tolerance: Option<f64>,
}

pub fn run_degree(ctx: &Context) -> anyhow::Result<()> {
    let records = degree_centrality(&ctx.snapshot.contacts, &ctx.graph());

    render_mode(
        ctx.output,
        &records,
        |records, w| {
            writeln!(w, "id\tname\tdegree\tnormalized")?;
            for r in records {
                writeln!(w, "{}\t{}\t{}\t{:.4}", r.id, r.name, r.degree, r.normalized_degree)?;
            }
            Ok(())
        },
        |records, w| {
            pretty_section(w, "Degree centrality")?;
            for (rank, r) in records.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}. {:<40} {:>4} connections  ({:.1}%)",
                    rank + 1,
                    label(&r.name, &r.company),
                    r.degree,
                    r.normalized_degree * 100.0
                )?;
            }
            Ok(())
        },
    )
}

pub fn run_brokers(ctx: &Context) -> anyhow::Result<()> {
    let records = broker_scores(&ctx.snapshot.contacts, &ctx.graph());

    render_mode(
        ctx.output,
        &records,
        |records, w| {
            writeln!(w, "id\tname\tbridges\tbroker_score")?;
            for r in records {
                writeln!(w, "{}\t{}\t{}\t{:.4}", r.id, r.name, r.bridges, r.broker_score)?;
            }
            Ok(())
        },
        |records, w| {
            pretty_section(w, "Brokers (bridges between disconnected contacts)")?;
            for (rank, r) in records.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}. {:<40} {:>4} bridges  score {:.2}",
                    rank + 1,
                    label(&r.name, &r.company),
                    r.bridges,
                    r.broker_score
                )?;
            }
            Ok(())
        },
    )
}

pub fn run_holes(ctx: &Context) -> anyhow::Result<()> {
    let records = structural_holes(&ctx.snapshot.contacts, &ctx.graph());

    render_mode(
        ctx.output,
        &records,
        |records, w| {
            writeln!(w, "id\tname\tconstraint\taccess\tcontacts")?;
            for r in records {
                writeln!(
                    w,
                    "{}\t{}\t{:.4}\t{:.4}\t{}",
                    r.id, r.name, r.constraint, r.structural_holes_access, r.non_redundant_contacts
                )?;
            }
            Ok(())
        },
        |records, w| {
            pretty_section(w, "Structural holes (access to non-redundant contacts)")?;
            for (rank, r) in records.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}. {:<40} access {:.2}  constraint {:.2}  ({} contacts)",
                    rank + 1,
                    label(&r.name, &r.company),
                    r.structural_holes_access,
                    r.constraint,
                    r.non_redundant_contacts
                )?;
            }
            Ok(())
        },
    )
}

pub fn run_influence(args: &InfluenceArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut config = ctx.config.influence;
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if args.tolerance.is_some() {
        config.tolerance = args.tolerance;
    }

    let result = influence_scores(&ctx.snapshot.contacts, &ctx.graph(), &config);

    render_mode(
        ctx.output,
        &result,
        |result, w| {
            writeln!(w, "id\tname\ttier\tinfluence\tinterpretation")?;
            for r in &result.records {
                writeln!(
                    w,
                    "{}\t{}\t{}\t{:.4}\t{}",
                    r.id, r.name, r.tier, r.influence_score, r.interpretation
                )?;
            }
            Ok(())
        },
        |result, w| {
            pretty_section(w, "Network influence")?;
            pretty_kv(w, "Rounds", result.iterations.to_string())?;
            pretty_kv(w, "Converged", if result.converged { "yes" } else { "n/a" })?;
            pretty_rule(w)?;
            for (rank, r) in result.records.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}. {:<40} {:>6.2}  {}",
                    rank + 1,
                    label(&r.name, &r.company),
                    r.influence_score,
                    r.interpretation
                )?;
            }
            Ok(())
        },
    )
}

pub fn run_multipliers(ctx: &Context) -> anyhow::Result<()> {
    let records = network_multipliers(
        &ctx.snapshot.contacts,
        &ctx.graph(),
        &ctx.config.multiplier,
        &ctx.config.influence,
    );

    render_mode(
        ctx.output,
        &records,
        |records, w| {
            writeln!(w, "id\tname\tscore\tbroker\tholes\tinfluence\twhy")?;
            for r in records {
                writeln!(
                    w,
                    "{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{}",
                    r.id,
                    r.name,
                    r.multiplier_score,
                    r.broker_score,
                    r.structural_holes_access,
                    r.influence_score,
                    r.why_valuable
                )?;
            }
            Ok(())
        },
        |records, w| {
            pretty_section(w, "Network multipliers")?;
            if records.is_empty() {
                writeln!(w, "No contacts above the multiplier threshold.")?;
            }
            for (rank, r) in records.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}. {:<40} {:.3}  (tier {})",
                    rank + 1,
                    label(&r.name, &r.company),
                    r.multiplier_score,
                    r.tier
                )?;
                writeln!(w, "     {}", r.why_valuable)?;
            }
            Ok(())
        },
    )
}
