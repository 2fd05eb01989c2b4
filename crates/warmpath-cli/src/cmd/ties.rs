//! `wp ties|homophily|contact` — relationship-level views.

use std::io::{self, Write};

use clap::Args;
use warmpath_graph::ties::ContactTie;
use warmpath_graph::{contact_ties, homophily, tie_strengths};

use super::{Context, label};
use crate::output::{pretty_kv, pretty_rule, pretty_section, render_mode};

/// Arguments for `wp contact`.
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Contact ID.
    pub id: String,
}

pub fn run_ties(ctx: &Context) -> anyhow::Result<()> {
    let records = tie_strengths(
        &ctx.snapshot.relationships,
        &ctx.snapshot.interactions,
        &ctx.snapshot.contacts,
    );

    render_mode(
        ctx.output,
        &records,
        |records, w| {
            writeln!(w, "contact_1\tcontact_2\tstrength\tfrequency\ttie_strength\tclass")?;
            for r in records {
                writeln!(
                    w,
                    "{}\t{}\t{:.2}\t{:.2}\t{:.3}\t{}",
                    r.contact_1,
                    r.contact_2,
                    r.strength,
                    r.frequency_score,
                    r.tie_strength,
                    r.class.label()
                )?;
            }
            Ok(())
        },
        |records, w| {
            pretty_section(w, "Tie strength")?;
            for r in records {
                writeln!(
                    w,
                    "{:<6} {:.2}  {} <-> {}",
                    r.class.label(),
                    r.tie_strength,
                    r.name_1,
                    r.name_2
                )?;
                writeln!(w, "       {}", r.strategic_value)?;
            }
            Ok(())
        },
    )
}

pub fn run_homophily(ctx: &Context) -> anyhow::Result<()> {
    let summary = homophily(&ctx.snapshot.relationships, &ctx.snapshot.contacts);

    render_mode(
        ctx.output,
        &summary,
        |s, w| {
            writeln!(
                w,
                "{:.4}\t{}\t{}",
                s.homophily_index, s.same_category_connections, s.cross_category_connections
            )
        },
        |s, w| {
            pretty_section(w, "Network homophily")?;
            pretty_kv(w, "Index", format!("{:.2}", s.homophily_index))?;
            pretty_kv(w, "Same category", s.same_category_connections.to_string())?;
            pretty_kv(w, "Cross category", s.cross_category_connections.to_string())?;
            pretty_rule(w)?;
            writeln!(w, "{}", s.interpretation)
        },
    )
}

pub fn run_contact(args: &ContactArgs, ctx: &Context) -> anyhow::Result<()> {
    let contact = ctx.require_contact(&args.id)?;
    let ties = contact_ties(&args.id, &ctx.snapshot.relationships, &ctx.snapshot.contacts);

    render_mode(
        ctx.output,
        &ties,
        |ties, w| {
            writeln!(w, "class\tid\tname\tkind\tstrength")?;
            for (class, group) in [("strong", &ties.strong), ("medium", &ties.medium), ("weak", &ties.weak)] {
                for tie in group {
                    writeln!(
                        w,
                        "{class}\t{}\t{}\t{}\t{:.2}",
                        tie.contact.id, tie.contact.name, tie.relationship_kind, tie.strength
                    )?;
                }
            }
            Ok(())
        },
        |ties, w| {
            pretty_section(w, &label(&contact.name, &contact.company))?;
            pretty_kv(w, "Category", &contact.category)?;
            pretty_kv(w, "Tier", contact.tier.to_string())?;
            pretty_kv(w, "Relationships", ties.total().to_string())?;
            write_group(w, "Strong ties", &ties.strong)?;
            write_group(w, "Medium ties", &ties.medium)?;
            write_group(w, "Weak ties", &ties.weak)
        },
    )
}

fn write_group(w: &mut dyn Write, heading: &str, group: &[ContactTie]) -> io::Result<()> {
    if group.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    pretty_section(w, &format!("{heading} ({})", group.len()))?;
    for tie in group {
        writeln!(
            w,
            "  {:<40} {:.2}  {}",
            label(&tie.contact.name, &tie.contact.company),
            tie.strength,
            tie.relationship_kind
        )?;
        if !tie.note.is_empty() {
            writeln!(w, "    {}", tie.note)?;
        }
    }
    Ok(())
}
