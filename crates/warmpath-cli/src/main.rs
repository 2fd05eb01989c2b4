#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::{CliError, OutputMode};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use warmpath_core::config::{self, DATA_DIR_ENV};
use warmpath_core::error::ErrorCode;

#[derive(Parser, Debug)]
#[command(
    name = "wp",
    author,
    version,
    about = "warmpath: find brokers and warm introduction paths in your network",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding contacts.json, relationships.json and interactions.json.
    #[arg(long, global = true, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Overview",
        about = "Full network report",
        long_about = "Top network multipliers, structural holes, brokers, influence, and homophily in one report.",
        after_help = "EXAMPLES:\n    # Report on ./data\n    wp report\n\n    # Emit machine-readable output\n    wp report --format json"
    )]
    Report,

    #[command(next_help_heading = "Metrics", about = "Rank contacts by direct connections")]
    Degree,

    #[command(
        next_help_heading = "Metrics",
        about = "Rank contacts by broker score",
        long_about = "Rank contacts by how many pairs of their acquaintances do not know each other."
    )]
    Brokers,

    #[command(
        next_help_heading = "Metrics",
        about = "Rank contacts by structural-holes access"
    )]
    Holes,

    #[command(
        next_help_heading = "Metrics",
        about = "Rank contacts by network influence",
        after_help = "EXAMPLES:\n    # Default 20 rounds\n    wp influence\n\n    # Stop early once scores settle\n    wp influence --tolerance 1e-9"
    )]
    Influence(cmd::metrics::InfluenceArgs),

    #[command(
        next_help_heading = "Metrics",
        about = "Rank contacts by composite network-multiplier score"
    )]
    Multipliers,

    #[command(next_help_heading = "Ties", about = "Classify every relationship by tie strength")]
    Ties,

    #[command(next_help_heading = "Ties", about = "Measure category clustering")]
    Homophily,

    #[command(
        next_help_heading = "Ties",
        about = "Show one contact's relationships grouped by strength"
    )]
    Contact(cmd::ties::ContactArgs),

    #[command(
        next_help_heading = "Paths",
        about = "Contacts within N hops",
        after_help = "EXAMPLES:\n    wp reach c-042 --degrees 3"
    )]
    Reach(cmd::paths::ReachArgs),

    #[command(
        next_help_heading = "Paths",
        about = "Warm introduction paths to a target",
        after_help = "EXAMPLES:\n    # Who can introduce me to c-108?\n    wp paths c-108\n\n    # Allow longer chains\n    wp paths c-108 --max-depth 3"
    )]
    Paths(cmd::paths::PathsArgs),

    #[command(next_help_heading = "Paths", about = "Shared direct connections of two contacts")]
    Mutual(cmd::paths::MutualArgs),

    #[command(
        next_help_heading = "Paths",
        about = "Pairs of contacts worth introducing to each other"
    )]
    Opportunities,

    #[command(
        next_help_heading = "Export",
        about = "Export nodes and edges as JSON",
        after_help = "EXAMPLES:\n    wp export --output graph.json"
    )]
    Export(cmd::export::ExportArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WARMPATH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "warmpath=debug,wp=debug,info"
        } else {
            "warmpath=info,wp=info,warn"
        })
    });

    let format = env::var("WARMPATH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries command output.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = env::current_dir()?;
    let config = match config::load_config(&project_root) {
        Ok(config) => config,
        Err(err) => {
            let mode = output::resolve_output_mode(cli.format, None);
            output::render_error(
                mode,
                &CliError::from_code(ErrorCode::ConfigParseError, format!("{err:#}")),
            )?;
            return Err(err);
        }
    };
    let output = output::resolve_output_mode(cli.format, config.output.format.as_deref());
    let data_dir = config
        .data
        .resolve_dir(&project_root, cli.data.as_deref(), env::var(DATA_DIR_ENV).ok());
    debug!(data_dir = %data_dir.display(), ?output, "resolved invocation settings");

    let ctx = cmd::Context::load(&data_dir, config, output)?;

    match cli.command {
        Commands::Report => cmd::report::run_report(&ctx),
        Commands::Degree => cmd::metrics::run_degree(&ctx),
        Commands::Brokers => cmd::metrics::run_brokers(&ctx),
        Commands::Holes => cmd::metrics::run_holes(&ctx),
        Commands::Influence(ref args) => cmd::metrics::run_influence(args, &ctx),
        Commands::Multipliers => cmd::metrics::run_multipliers(&ctx),
        Commands::Ties => cmd::ties::run_ties(&ctx),
        Commands::Homophily => cmd::ties::run_homophily(&ctx),
        Commands::Contact(ref args) => cmd::ties::run_contact(args, &ctx),
        Commands::Reach(ref args) => cmd::paths::run_reach(args, &ctx),
        Commands::Paths(ref args) => cmd::paths::run_paths(args, &ctx),
        Commands::Mutual(ref args) => cmd::paths::run_mutual(args, &ctx),
        Commands::Opportunities => cmd::opportunities::run_opportunities(&ctx),
        Commands::Export(ref args) => cmd::export::run_export(args, &ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["wp", "brokers", "--format", "json", "--data", "fixtures"]);
        assert_eq!(cli.format, Some(OutputMode::Json));
        assert_eq!(cli.data, Some(PathBuf::from("fixtures")));
        assert!(matches!(cli.command, Commands::Brokers));
    }

    #[test]
    fn paths_takes_target_and_depth() {
        let cli = Cli::parse_from(["wp", "paths", "c-9", "--max-depth", "3"]);
        match cli.command {
            Commands::Paths(args) => {
                assert_eq!(args.target, "c-9");
                assert_eq!(args.max_depth, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
