use colored::Colorize;
use serde_json::json;
use yarrrml_fed_mapping::{ComparisonResult, JoinCandidates};

use crate::error::{CliError, CliResult};

/// Print the analysis as a single JSON document.
pub fn print_json(overlap: &ComparisonResult, joins: Option<&JoinCandidates>) -> CliResult<()> {
    let report = match joins {
        Some(joins) => json!({ "comparison": overlap, "joins": joins }),
        None => json!({ "comparison": overlap }),
    };
    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|e| CliError::Render(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

/// Print the analysis as a styled terminal report.
pub fn print_report(overlap: &ComparisonResult, joins: Option<&JoinCandidates>) {
    println!("{}", "datasets".bold());
    for (idx, dataset) in overlap.datasets.iter().enumerate() {
        match dataset {
            Some(dataset) => println!("  {}. {dataset}", idx + 1),
            None => println!("  {}. {}", idx + 1, "(none declared)".dimmed()),
        }
    }

    print_section("shared classes", &overlap.classes);
    print_section("shared properties", &overlap.properties);
    print_section("shared subject templates", &overlap.templates);

    if let Some(joins) = joins {
        println!();
        println!("{}", "join candidates".bold());
        for (category, patterns) in joins.categories() {
            println!("  {} ({})", category.cyan(), patterns.len());
            for pattern in patterns {
                println!("    {pattern}");
            }
        }
    }
}

fn print_section(title: &str, items: &[String]) {
    println!();
    println!("{} ({})", title.bold(), items.len());
    for item in items {
        println!("  {item}");
    }
}
