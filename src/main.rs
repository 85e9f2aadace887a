//! vehicle-catalog: browse, filter and compare vehicle compatibility data
//!
//! Scripting-friendly reports plus an interactive terminal browser over the
//! vehicle metadata dataset.

#![allow(
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value
)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vehicle_catalog::{
    catalog::{PresenceFilter, SortField, SortOrder},
    cli::{self, ListFilter, TuiLaunch},
    config::{self, AppConfig, AppConfigBuilder, Validatable},
    reports::ReportFormat,
};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  Vehicle metadata JSON (array of records), optional longitudinal reports index",
        "\n\nOutput Formats:",
        "\n  tui, summary, table, json, csv, markdown"
    )
}

#[derive(Parser)]
#[command(name = "vehicle-catalog")]
#[command(version, long_version = build_long_version())]
#[command(about = "Browse, filter and compare vehicle compatibility data", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Vehicle not found / no results / changes detected (diff --fail-on-change)
    3  Error occurred

EXAMPLES:
    # Browse interactively
    vehicle-catalog tui --data vehicles.json

    # Upstream Toyotas as JSON
    vehicle-catalog list --make Toyota --support upstream -o json

    # Side-by-side comparison, differing rows only
    vehicle-catalog compare honda-civic-2022,toyota-rav4-2019-21 --only-differences

    # What changed between two dataset snapshots
    vehicle-catalog diff old.json new.json -o markdown")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Vehicle dataset JSON (defaults to the configured or discovered file)
    #[arg(long = "data", alias = "dataset", global = true, env = "VEHICLE_CATALOG_DATA")]
    data: Option<PathBuf>,

    /// Longitudinal reports index JSON
    #[arg(long, global = true)]
    reports: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Output selection shared by the reporting subcommands
#[derive(clap::Args)]
struct OutputArgs {
    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Filters shared by `list` and `tui`
#[derive(clap::Args, Clone)]
struct FilterArgs {
    /// Free-text search over name, make, model, years and package
    query: Option<String>,

    /// Support level (upstream, under-review, community, dashcam-mode, not-compatible)
    #[arg(long)]
    support: Option<String>,

    /// Exact make, e.g. Toyota
    #[arg(long)]
    make: Option<String>,

    /// Exact model, e.g. "RAV4 Hybrid"
    #[arg(long)]
    model: Option<String>,

    /// Any covered model year, e.g. 2021
    #[arg(long)]
    year: Option<String>,

    /// Require (yes) or exclude (no) a demo video
    #[arg(long, value_enum, default_value = "any")]
    has_video: PresenceFilter,

    /// Require (yes) or exclude (no) a setup video
    #[arg(long, value_enum, default_value = "any")]
    has_setup_video: PresenceFilter,

    /// Require (yes) or exclude (no) longitudinal reports
    #[arg(long, value_enum, default_value = "any")]
    has_report: PresenceFilter,
}

impl FilterArgs {
    fn into_list_filter(self) -> ListFilter {
        ListFilter {
            query: self.query,
            support: self.support,
            make: self.make,
            model: self.model,
            year: self.year,
            has_video: self.has_video,
            has_setup_video: self.has_setup_video,
            has_report: self.has_report,
        }
    }
}

/// Arguments for the `list` subcommand
#[derive(Parser)]
struct ListArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Sort field
    #[arg(long, value_enum)]
    sort: Option<SortField>,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// Show at most N vehicles
    #[arg(long)]
    limit: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Vehicles as slugs or names; a single comma-separated value works too
    #[arg(required = true)]
    vehicles: Vec<String>,

    /// Only show rows where the vehicles differ
    #[arg(long)]
    only_differences: bool,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old dataset snapshot
    old: PathBuf,

    /// Path to the new dataset snapshot
    new: PathBuf,

    /// Exit with code 1 if any vehicle was added, removed or changed
    #[arg(long)]
    fail_on_change: bool,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `tui` subcommand
#[derive(Parser)]
struct TuiArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Open a vehicle's detail page
    #[arg(long, value_name = "NAME|SLUG", conflicts_with = "compare")]
    detail: Option<String>,

    /// Open a comparison (comma-separated slugs, as in `cars=`)
    #[arg(long, value_name = "SLUGS")]
    compare: Option<String>,

    /// UI theme (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List vehicles matching filters
    List(ListArgs),

    /// Show one vehicle's details
    Show {
        /// Vehicle name or slug
        vehicle: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two to six vehicles side by side
    Compare(CompareArgs),

    /// Compare two dataset snapshots
    Diff(DiffArgs),

    /// Print the values each filter menu offers
    Options {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Open the interactive browser
    Tui(TuiArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .vehicle-catalog.yaml in the current directory
    Init {
        /// Write only the most common settings
        #[arg(long)]
        minimal: bool,
    },
}

/// Merge the config file with the global flags and a command's output args.
fn effective_config(cli: &Cli, output: Option<&OutputArgs>) -> AppConfig {
    let mut builder = AppConfigBuilder::default()
        .dataset(cli.data.clone())
        .reports(cli.reports.clone())
        .no_color(cli.no_color);
    if let Some(output) = output {
        builder = builder
            .output_format(output.output)
            .output_file(output.output_file.clone());
    }
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &builder.build());
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    for err in config.validate() {
        tracing::warn!("Invalid configuration: {err}");
    }
    config
}

fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match &cli.command {
        Commands::List(args) => {
            let mut config = effective_config(&cli, Some(&args.output));
            if let Some(field) = args.sort {
                config.catalog.sort.set_field(field);
            }
            if args.desc {
                config.catalog.sort.order = SortOrder::Desc;
            }
            if args.limit.is_some() {
                config.catalog.limit = args.limit;
            }
            let filter = args.filters.clone().into_list_filter();
            exit_with(cli::run_list(&config, &filter, cli.quiet)?)
        }

        Commands::Show { vehicle, output } => {
            let config = effective_config(&cli, Some(output));
            exit_with(cli::run_show(&config, vehicle, cli.quiet)?)
        }

        Commands::Compare(args) => {
            let config = effective_config(&cli, Some(&args.output));
            exit_with(cli::run_compare(
                &config,
                &args.vehicles,
                args.only_differences,
                cli.quiet,
            )?)
        }

        Commands::Diff(args) => {
            let config = effective_config(&cli, Some(&args.output));
            exit_with(cli::run_diff(
                &config,
                &args.old,
                &args.new,
                args.fail_on_change,
                cli.quiet,
            )?)
        }

        Commands::Options { output } => {
            let config = effective_config(&cli, Some(output));
            exit_with(cli::run_options(&config, cli.quiet)?)
        }

        Commands::Tui(args) => {
            let mut config = effective_config(&cli, None);
            if let Some(theme) = &args.theme {
                config.tui.theme.clone_from(theme);
            }
            let filters = args.filters.clone().into_list_filter().to_filter_state()?;
            let launch = TuiLaunch {
                filters,
                detail: args.detail.clone(),
                compare: args
                    .compare
                    .as_deref()
                    .map(|cars| cars.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_default(),
            };
            exit_with(cli::run_browse(&config, launch, cli.quiet)?)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "vehicle-catalog", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init { minimal } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".vehicle-catalog.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = if *minimal {
                    config::generate_example_config()
                } else {
                    config::generate_full_example_config()
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_init_minimal_flag() {
        let cli = Cli::try_parse_from(["vehicle-catalog", "config", "init", "--minimal"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init { minimal: true }
            }
        ));

        let cli = Cli::try_parse_from(["vehicle-catalog", "config", "init"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init { minimal: false }
            }
        ));
    }

    #[test]
    fn test_tui_detail_conflicts_with_compare() {
        let result = Cli::try_parse_from([
            "vehicle-catalog",
            "tui",
            "--detail",
            "honda-civic-2022",
            "--compare",
            "honda-civic-2022,toyota-prius-2016",
        ]);
        assert!(result.is_err());
    }
}
