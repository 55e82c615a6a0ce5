//! Report formatting for the survey phases, summary and recommendations

use colored::Colorize;
use skuscout_cloud::{Recommendation, SkuQueryResult};

const RULE_WIDTH: usize = 60;

/// Print a banner block framed by `=` rules
pub fn banner(lines: &[&str]) {
    println!("{}", "=".repeat(RULE_WIDTH));
    for line in lines {
        println!("{}", line.bold());
    }
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn search_header(pattern: &str, region_count: usize) {
    println!();
    println!(
        "🔍 Searching for {} across {} regions...",
        pattern.cyan(),
        region_count
    );
    println!("{}", "-".repeat(RULE_WIDTH).dimmed());
}

/// First `limit` names, with a count of what was cut
pub fn preview(names: &[String], limit: usize) -> String {
    let head: Vec<&str> = names.iter().take(limit).map(String::as_str).collect();
    let mut line = head.join(", ");
    if names.len() > limit {
        line.push_str(&format!(" ... (+{} more)", names.len() - limit));
    }
    line
}

/// Per-pattern summary of the regions that had availability
///
/// `regions` is the original survey order; a region's list position is its
/// distance rank in the report.
pub fn print_summary(surveys: &[(String, Vec<SkuQueryResult>)], regions: &[String]) {
    println!();
    banner(&["SUMMARY"]);

    for (pattern, results) in surveys {
        println!();
        println!("📋 {} Available Regions:", pattern.cyan());

        if results.is_empty() {
            println!(
                "  {}",
                format!("❌ No {pattern} available in any region checked").red()
            );
            continue;
        }

        for result in results {
            let rank = regions
                .iter()
                .position(|r| r == &result.region)
                .map(|p| p + 1)
                .unwrap_or(0);
            println!(
                "  {}. {}: {}",
                rank,
                result.region.green(),
                preview(&result.available, 5)
            );
        }
    }
}

pub fn print_recommendations(recommendations: &[(String, Option<Recommendation>)]) {
    println!();
    banner(&["RECOMMENDATIONS (ordered by distance rank)"]);

    let mut any_found = false;
    for (pattern, rec) in recommendations {
        let Some(rec) = rec else { continue };
        any_found = true;

        println!();
        println!(
            "🏆 Best {}: {} - {}",
            pattern.cyan(),
            rec.region.green().bold(),
            rec.sku.bold()
        );
        if let Some(note) = pattern_note(pattern) {
            println!("   {}", note.dimmed());
        }
    }

    if !any_found {
        println!();
        println!("{}", "⚠️  No unrestricted VMs found. You may need to:".yellow());
        println!("   1. Request a quota increase from Azure");
        println!("   2. Try a different VM family (A-series, F-series)");
        println!("   3. Check if your subscription has regional restrictions");
    }
}

fn pattern_note(pattern: &str) -> Option<&'static str> {
    match pattern {
        "Standard_B1s" => Some("1 vCPU, 1 GB RAM - ~$7/month"),
        p if p.starts_with("Standard_D2") => {
            Some("2 vCPUs, varies RAM - more expensive but more available")
        }
        _ => None,
    }
}
