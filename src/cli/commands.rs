//! Command implementation for the palmer_stats CLI
//!
//! This module contains the survey command execution logic: logging setup,
//! configuration validation, the linear pipeline run, and console
//! reporting. The pipeline only executes through [`run`]; loading the
//! library has no side effects.

use crate::app::models::SurveySummary;
use crate::app::services::dataset_loader::load_census;
use crate::app::services::report_writer::{ReportValue, format_report_lines, write_report};
use crate::app::services::survey_stats::{filter_species, mean_flipper_length, percent_above_mean};
use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;
use colored::*;
use tracing::{debug, info};

/// Run the survey pipeline end to end
///
/// Loads the census, filters the species subset, computes the two survey
/// figures, writes the report, and prints the results. Aborts on the first
/// unhandled error; data-quality issues inside the pipeline degrade to
/// zero-valued results instead of failing.
pub fn run(args: Args) -> Result<SurveySummary> {
    setup_logging(&args)?;

    info!("Starting penguin survey");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;
    debug!("Run configuration: {:?}", config);

    let load_result = load_census(&config.input_path)?;
    info!(
        "Census loaded: {} records ({} skipped)",
        load_result.stats.records_loaded, load_result.stats.records_skipped
    );

    let subset = filter_species(&load_result.penguins, &config.target_species);
    info!(
        "Selected {} {} records",
        subset.len(),
        config.target_species
    );

    let average = mean_flipper_length(&subset);
    let percentage = percent_above_mean(&subset, average, &config.target_island);

    let summary = SurveySummary::new(average, percentage);
    info!("{}", summary.summary());

    write_report(
        &ReportValue::Number(average),
        &ReportValue::Number(percentage),
        &config.target_species,
        &config.target_island,
        &config.report_path,
    )?;

    if !args.quiet {
        print_results(&config, &summary);
    }

    Ok(summary)
}

/// Print the survey results and a confirmation to stdout
fn print_results(config: &Config, summary: &SurveySummary) {
    let lines = format_report_lines(
        &ReportValue::Number(summary.mean_flipper_length),
        &ReportValue::Number(summary.pct_above_mean),
        &config.target_species,
        &config.target_island,
    );

    for line in &lines {
        println!("{line}");
    }
    println!(
        "{}",
        format!("Results written to \"{}\".", config.report_path.display()).bright_green()
    );
}

/// Set up structured logging for the survey command
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("palmer_stats={}", log_level)));

    // Diagnostics go to stderr so stdout stays clean for the results
    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
