use analytics::{AnalysisKind, AnalyticsEngine};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod display;

/// The main entry point for the Finlens analysis application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load FINLENS__* overrides from a .env file, if one exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_settings(cli.config.as_deref())
        .context("Failed to load configuration")?;
    // The guard must live until the end of main so buffered log lines are flushed.
    let _guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            settings.server.apply_overrides(&args.overrides);
            settings.validate()?;
            web_server::run_server(settings).await?;
        }
        Commands::Analyze(args) => handle_analyze(args)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Financial statement analysis: DuPont, ratios, vertical, horizontal and cash flow.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to `finlens.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP analysis API.
    Serve(ServeArgs),
    /// Analyze a JSON file holding a current and a prior period.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    #[command(flatten)]
    overrides: configuration::ServerOverrides,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// The JSON file to analyze, in the same shape the API accepts.
    #[arg(long)]
    input: PathBuf,

    /// How to print the report.
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Comma-separated analyses to run (e.g. "dupont,cash-flow"). Defaults to all.
    #[arg(long, value_delimiter = ',')]
    only: Vec<AnalysisKind>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Reads the input file, runs the selected analyses and prints the report.
fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let body = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let request = web_server::wire::parse_request(&body)
        .with_context(|| format!("Invalid analysis input in {}", args.input.display()))?;

    let kinds = if args.only.is_empty() {
        AnalysisKind::ALL.to_vec()
    } else {
        args.only
    };
    tracing::info!(input = %args.input.display(), ?kinds, "Running analysis.");

    let report = AnalyticsEngine::new().calculate_selected(&request, &kinds);

    match args.format {
        OutputFormat::Table => println!("{}", display::render_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
