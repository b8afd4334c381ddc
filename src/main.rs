//! gendiff: structural diff tool for JSON and YAML documents
//!
//! Compares two documents key by key and prints the differences.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use gendiff::{
    cli,
    config::{
        config_search_dirs, discover_config_file, generate_example_config, generate_json_schema,
        load_or_default, AppConfig, ConfigPreset, DiffConfig, CONFIG_FILE_NAMES,
    },
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  JSON (.json), YAML (.yaml, .yml); other files detected from content",
        "\n\nOutput Formats:",
        "\n  stylish, plain, json, summary"
    )
}

#[derive(Parser)]
#[command(name = "gendiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Compares two configuration files and shows a difference", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (or changes found without --fail-on-change)
    1  Changes detected with --fail-on-change, or an error occurred

EXAMPLES:
    # Stylish tree diff
    gendiff diff before.json after.json

    # One sentence per change
    gendiff diff before.yml after.yml -f plain

    # CI check writing a JSON report
    gendiff diff base.yaml head.yaml --preset ci-cd -O diff.json")]
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

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the first (old) document
    first: PathBuf,

    /// Path to the second (new) document
    second: PathBuf,

    /// Output format [default: stylish]
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Deepest nesting level to compare, 0 for unlimited [default: 128]
    #[arg(long)]
    max_depth: Option<usize>,

    /// List unchanged keys in plain output
    #[arg(long)]
    include_unchanged: bool,

    /// Exit with code 1 if any changes detected
    #[arg(long)]
    fail_on_change: bool,

    /// Start from a named preset (default, ci-cd, review) instead of the config file
    #[arg(long, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents
    Diff(DiffArgs),

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
    /// Generate an example .gendiff.yaml in the current directory
    Init,
}

fn parse_preset(name: &str) -> std::result::Result<ConfigPreset, String> {
    ConfigPreset::from_name(name).ok_or_else(|| {
        let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{name}' (valid: {})", valid.join(", "))
    })
}

/// Layer the diff flags over the file config (or preset).
fn build_diff_config(
    config_path: Option<&Path>,
    no_color: bool,
    quiet: bool,
    args: DiffArgs,
) -> DiffConfig {
    let mut app = match args.preset {
        Some(preset) => AppConfig::from_preset(preset),
        None => load_or_default(config_path).0,
    };

    let overrides = AppConfig::builder()
        .output_file(args.output_file)
        .no_color(no_color)
        .include_unchanged(args.include_unchanged)
        .fail_on_change(args.fail_on_change)
        .quiet(quiet)
        .build();
    app.merge(&overrides);

    // Explicit flags win even when they name the default value.
    if let Some(format) = args.format {
        app.output.format = format;
    }
    if let Some(depth) = args.max_depth {
        app.diff.max_depth = depth;
    }

    DiffConfig::from_app(app, args.first, args.second)
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
    match cli.command {
        Commands::Diff(args) => {
            let config = build_diff_config(cli.config.as_deref(), cli.no_color, cli.quiet, args);
            let exit_code = cli::run_diff(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "gendiff", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
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
                let (config, loaded_from) = load_or_default(cli.config.as_deref());
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
                eprintln!("Config file search paths (in order):");
                for dir in config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".gendiff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
