//! docdiff: structural and textual diff for JSON, XML and plain text.
//!
//! Compares two documents after canonicalization and reports the differences
//! as a summary, JSON, or a side-by-side terminal view.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use docdiff::{
    align::AlignmentStrategy,
    cli::{self, CompareRequest, InputFormat},
    config::AppConfig,
    model::{ComparisonOptions, TextMode},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  JSON, XML, plain text (line or word granularity)",
        "\n\nOutput Formats:",
        "\n  summary, json, side-by-side",
        "\n\nAlignment Strategies:",
        "\n  lcs (default), forward-scan"
    )
}

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Structural and textual diff for JSON, XML and plain text", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Documents are equal (or --fail-on-change not set)
    1  Differences detected (with --fail-on-change)
    2  An input failed to parse (with --fail-on-change)
    3  Error occurred

EXAMPLES:
    # Compare two JSON files ignoring key order
    docdiff compare old.json new.json --ignore-key-order

    # CI/CD check with machine-readable output
    docdiff compare expected.xml actual.xml -o json --fail-on-change

    # Word-level text diff, reading the right side from stdin
    cat new.txt | docdiff compare old.txt - --mode word -o side-by-side")]
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
    #[arg(long, global = true, env = "DOCDIFF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the left/baseline document (`-` for stdin)
    left: PathBuf,

    /// Path to the right/candidate document (`-` for stdin)
    right: PathBuf,

    /// Input format (auto detects from content)
    #[arg(short, long, value_enum, default_value = "auto")]
    format: InputFormat,

    /// Text granularity
    #[arg(long, value_enum)]
    mode: Option<TextMode>,

    /// Alignment strategy for text comparisons
    #[arg(long, value_enum)]
    strategy: Option<AlignmentStrategy>,

    /// Named configuration preset (default, strict, lenient, ci-cd)
    #[arg(long)]
    preset: Option<String>,

    /// Compare case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Collapse whitespace runs and trim values
    #[arg(long)]
    ignore_whitespace: bool,

    /// Ignore JSON key order and XML child order
    #[arg(long)]
    ignore_key_order: bool,

    /// Ignore JSON array element order
    #[arg(long)]
    ignore_array_order: bool,

    /// Ignore XML attribute order
    #[arg(long)]
    ignore_attribute_order: bool,

    /// Output format (auto detects TTY: side-by-side if interactive, summary otherwise)
    #[arg(short, long, value_enum, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Width of side-by-side output
    #[arg(long)]
    width: Option<usize>,

    /// Only show changed rows in side-by-side output
    #[arg(long)]
    only_changes: bool,

    /// Exit with code 1 if documents differ (2 if an input fails to parse)
    #[arg(long)]
    fail_on_change: bool,

    /// Largest accepted input per side, in bytes
    #[arg(long)]
    max_input_bytes: Option<u64>,
}

impl CompareArgs {
    /// Config holding only what was set on the command line.
    fn overrides(&self, no_color: bool, quiet: bool) -> AppConfig {
        let comparison = ComparisonOptions::default()
            .case_sensitive(!self.ignore_case)
            .ignore_whitespace(self.ignore_whitespace)
            .ignore_key_order(self.ignore_key_order)
            .ignore_array_order(self.ignore_array_order)
            .ignore_attribute_order(self.ignore_attribute_order);

        let mut builder = AppConfig::builder()
            .comparison(comparison)
            .output_format(self.output)
            .output_file(self.output_file.clone())
            .no_color(no_color)
            .only_changes(self.only_changes)
            .fail_on_change(self.fail_on_change)
            .quiet(quiet);

        if let Some(mode) = self.mode {
            builder = builder.text_mode(mode);
        }
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy);
        }
        if let Some(width) = self.width {
            builder = builder.width(width);
        }
        if let Some(bytes) = self.max_input_bytes {
            builder = builder.max_input_bytes(bytes);
        }
        builder.build()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents
    Compare(CompareArgs),

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an example config file
    InitConfig {
        /// Write to this file instead of stdout (never overwrites)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include every option with comments
        #[arg(long)]
        full: bool,
    },

    /// Print the effective configuration (defaults merged with the config file)
    ShowConfig,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
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

    match run(cli) {
        Ok(code) if code != exit_codes::SUCCESS => std::process::exit(code),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Compare(args) => {
            let overrides = args.overrides(cli.no_color, cli.quiet);
            let (config, _) = cli::effective_config(
                cli.config.as_deref(),
                args.preset.as_deref(),
                &overrides,
            )?;
            let request = CompareRequest {
                left: args.left,
                right: args.right,
                format: args.format,
            };
            cli::run_compare(&request, &config)
        }

        Commands::ConfigSchema { output } => {
            let schema = docdiff::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::InitConfig { output, full } => {
            let content = cli::run_init_config(output.as_deref(), full)?;
            if output.is_none() {
                print!("{content}");
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::ShowConfig => {
            print!("{}", cli::run_show_config(cli.config.as_deref())?);
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "docdiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}
