//! `wp report` — the full network report.

use warmpath_graph::network_report;

use super::{Context, label};
use crate::output::{pretty_kv, pretty_rule, pretty_section, render_mode};

pub fn run_report(ctx: &Context) -> anyhow::Result<()> {
    let report = network_report(&ctx.snapshot, &ctx.config);

    render_mode(
        ctx.output,
        &report,
        |report, w| {
            writeln!(w, "section\tid\tname\tvalue")?;
            for r in &report.multipliers {
                writeln!(w, "multiplier\t{}\t{}\t{:.4}", r.id, r.name, r.multiplier_score)?;
            }
            for r in &report.structural_holes {
                writeln!(w, "holes\t{}\t{}\t{:.4}", r.id, r.name, r.structural_holes_access)?;
            }
            for r in &report.brokers {
                writeln!(w, "broker\t{}\t{}\t{}", r.id, r.name, r.bridges)?;
            }
            for r in &report.influence {
                writeln!(w, "influence\t{}\t{}\t{:.4}", r.id, r.name, r.influence_score)?;
            }
            writeln!(w, "homophily\t-\t-\t{:.4}", report.homophily.homophily_index)
        },
        |report, w| {
            pretty_section(w, "Network analysis")?;
            pretty_kv(w, "Contacts", report.total_contacts.to_string())?;
            pretty_kv(w, "Relationships", report.total_relationships.to_string())?;

            writeln!(w)?;
            pretty_section(w, "Top network multipliers")?;
            for (rank, r) in report.multipliers.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}. {:<40} {:.3}",
                    rank + 1,
                    label(&r.name, &r.company),
                    r.multiplier_score
                )?;
                writeln!(w, "     {}", r.why_valuable)?;
            }

            writeln!(w)?;
            pretty_section(w, "Structural holes")?;
            for r in &report.structural_holes {
                writeln!(
                    w,
                    "  {:<40} access {:.2}  ({} contacts)",
                    label(&r.name, &r.company),
                    r.structural_holes_access,
                    r.non_redundant_contacts
                )?;
            }

            writeln!(w)?;
            pretty_section(w, "Brokers")?;
            for r in &report.brokers {
                writeln!(
                    w,
                    "  {:<40} {} bridges  score {:.2}",
                    label(&r.name, &r.company),
                    r.bridges,
                    r.broker_score
                )?;
            }

            writeln!(w)?;
            pretty_section(w, "Influence")?;
            for r in &report.influence {
                writeln!(
                    w,
                    "  {:<40} {:.2}  {}",
                    label(&r.name, &r.company),
                    r.influence_score,
                    r.interpretation
                )?;
            }

            writeln!(w)?;
            pretty_section(w, "Homophily")?;
            pretty_kv(w, "Index", format!("{:.2}", report.homophily.homophily_index))?;
            pretty_kv(
                w,
                "Same / cross",
                format!(
                    "{} / {}",
                    report.homophily.same_category_connections,
                    report.homophily.cross_category_connections
                ),
            )?;
            writeln!(w, "{}", report.homophily.interpretation)?;
            pretty_rule(w)
        },
    )
}
