mod progress;
mod report;

use clap::Parser;
use colored::Colorize;
use progress::SurveyProgress;
use skuscout_cloud::{
    Recommendation, SkuCatalog, SkuQueryResult, TieBreak, recommend, survey_regions,
};
use skuscout_cloud_azure::{AzCli, REGIONS_NEAR_BRAZIL};
use std::time::Duration;

/// Default SKU families to survey: the cheapest burstable size and the
/// small general-purpose family.
const DEFAULT_PATTERNS: [&str; 2] = ["Standard_B1s", "Standard_D2"];

#[derive(Parser)]
#[command(name = "skuscout")]
#[command(version)]
#[command(about = "Find unrestricted Azure VM SKUs in nearby regions", long_about = None)]
struct Cli {
    /// Region to check, repeatable, in priority order
    /// (default: the 14 regions closest to Brazil)
    #[arg(short, long = "region", value_name = "REGION")]
    regions: Vec<String>,

    /// SKU size/family pattern to survey, repeatable
    #[arg(short, long = "pattern", value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Per-query timeout in seconds
    #[arg(short, long, default_value_t = 120)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let regions: Vec<String> = if cli.regions.is_empty() {
        REGIONS_NEAR_BRAZIL.iter().map(|r| r.to_string()).collect()
    } else {
        cli.regions
    };
    let patterns: Vec<String> = if cli.patterns.is_empty() {
        DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
    } else {
        cli.patterns
    };

    let az = AzCli::with_timeout(Duration::from_secs(cli.timeout));

    report::banner(&[
        "Azure VM SKU Availability Checker",
        "Checking regions in distance order",
    ]);

    // Preflight only warns: a missing login shows up as per-region query
    // errors, and the run still exits 0 with an empty report.
    match az.check_auth().await {
        Ok(account) => println!("Subscription: {}", account.name.cyan()),
        Err(e) => println!("{}", format!("⚠️  az preflight failed: {e}").yellow()),
    }

    let mut surveys: Vec<(String, Vec<SkuQueryResult>)> = Vec::new();
    for (i, pattern) in patterns.iter().enumerate() {
        println!();
        report::banner(&[&format!("PHASE {}: Searching for {}", i + 1, pattern)]);

        let results = run_survey(&az, pattern, &regions).await;
        surveys.push((pattern.clone(), results));
    }

    report::print_summary(&surveys, &regions);

    let recommendations: Vec<(String, Option<Recommendation>)> = surveys
        .iter()
        .map(|(pattern, results)| (pattern.clone(), recommend(results, tie_break_for(pattern))))
        .collect();
    report::print_recommendations(&recommendations);

    Ok(())
}

async fn run_survey(
    catalog: &dyn SkuCatalog,
    pattern: &str,
    regions: &[String],
) -> Vec<SkuQueryResult> {
    report::search_header(pattern, regions.len());

    let progress = SurveyProgress::new();
    let results = survey_regions(catalog, pattern, regions, |event| {
        progress.handle(&event);
    })
    .await;
    progress.finish();

    results
}

/// D-series ships several hardware generations under one family name, so
/// its winner is re-ranked by generation instead of listing order.
fn tie_break_for(pattern: &str) -> TieBreak {
    if pattern.starts_with("Standard_D") {
        TieBreak::GenerationLadder
    } else {
        TieBreak::CommandOrder
    }
}
