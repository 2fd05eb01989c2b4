//! `wp opportunities` — unconnected pairs worth introducing.

use warmpath_graph::introduction_opportunities_with;

use super::Context;
use crate::output::{pretty_section, render_mode};

pub fn run_opportunities(ctx: &Context) -> anyhow::Result<()> {
    let records = introduction_opportunities_with(
        &ctx.snapshot.contacts,
        &ctx.graph(),
        &ctx.config.opportunities,
    );

    render_mode(
        ctx.output,
        &records,
        |records, w| {
            writeln!(w, "contact_1\tcontact_2\tscore\treason")?;
            for r in records {
                writeln!(w, "{}\t{}\t{}\t{}", r.contact_1, r.contact_2, r.score, r.reason)?;
            }
            Ok(())
        },
        |records, w| {
            pretty_section(w, "Introduction opportunities")?;
            if records.is_empty() {
                writeln!(w, "No unconnected pairs with enough in common.")?;
            }
            for r in records {
                writeln!(w, "  [{}] {}", r.score, r.action)?;
                writeln!(w, "      {}", r.reason)?;
            }
            Ok(())
        },
    )
}
