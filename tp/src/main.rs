//! Tripplan - AI travel planner for students
//!
//! CLI entry point: collect the trip inputs, call the inference endpoint,
//! render the plan and write the plan document.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripplan::cli::{Cli, Command, get_log_path};
use tripplan::config::Config;
use tripplan::domain::{self, PlanRequest};
use tripplan::llm::{LlmClient, create_client};
use tripplan::planner::Planner;
use tripplan::prompts::PromptLoader;
use tripplan::{output, report};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "Tripplan loaded config: provider={} model={}",
        config.llm.provider, config.llm.model
    );

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Plan {
            destination,
            days,
            budget,
            interests,
            all,
            output,
            no_report,
        } => cmd_plan(&config, destination, days, budget, interests, all, output, no_report).await,
        Command::Stays { city } => cmd_stays(&config, &city).await,
        Command::Travel { city } => cmd_travel(&config, &city).await,
        Command::Interests => {
            debug!("main: matched Interests command");
            output::print_interests();
            Ok(())
        }
    }
}

/// Build the planner with an explicitly constructed client
///
/// The API key is validated up front so a missing key fails before any
/// prompt rendering or network traffic.
fn build_planner(config: &Config) -> Result<Planner> {
    config
        .llm
        .resolve()
        .and_then(|r| r.get_api_key())
        .context("LLM API key not found. Check api-key-env or api-key-file in your config.")?;
    debug!("build_planner: API key found");

    let llm: Arc<dyn LlmClient> = create_client(&config.llm).context("Failed to create LLM client")?;

    Ok(Planner::new(llm, PromptLoader::new(), config.planner.clone()))
}

/// Generate a full travel plan
#[allow(clippy::too_many_arguments)]
async fn cmd_plan(
    config: &Config,
    destination: String,
    days: u32,
    budget: u32,
    interests: Vec<String>,
    all: bool,
    output_path: Option<PathBuf>,
    no_report: bool,
) -> Result<()> {
    debug!(%destination, days, budget, all, "cmd_plan: called");

    let interests = domain::resolve_interests(&interests, all)?;
    let request = PlanRequest::new(destination, days, budget, interests)?;

    let planner = build_planner(config)?;

    println!(
        "Generating a {}-day travel plan for {} (budget {} INR)...",
        request.days, request.destination, request.budget
    );

    let plan = planner.generate(&request).await?;
    info!(
        days = plan.itinerary.len(),
        stays = plan.stays.len(),
        "cmd_plan: plan generated"
    );

    output::print_plan(&plan, &config.output.maps_base_url);

    if no_report {
        debug!("cmd_plan: skipping plan document");
        return Ok(());
    }

    let path = output_path.unwrap_or_else(|| PathBuf::from(&config.output.report_file));
    report::write_report(&plan, &path)?;
    println!();
    println!("Plan written to {}", path.display());

    Ok(())
}

/// List budget stays for a city
async fn cmd_stays(config: &Config, city: &str) -> Result<()> {
    debug!(%city, "cmd_stays: called");
    let planner = build_planner(config)?;

    println!("Finding budget hostels and stays for students in {}...", city);
    let stays = planner.budget_stays(city).await?;

    println!();
    output::print_stays(city, &stays, &config.output.maps_base_url);
    Ok(())
}

/// Show travel options for a city
async fn cmd_travel(config: &Config, city: &str) -> Result<()> {
    debug!(%city, "cmd_travel: called");
    let planner = build_planner(config)?;

    println!("Finding best travel options for students in {}...", city);
    let travel_info = planner.travel_options(city).await?;

    println!();
    output::print_travel_options(city, &travel_info);
    Ok(())
}
