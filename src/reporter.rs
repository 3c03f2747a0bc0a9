use crate::models::{AnalysisReport, AnalysisResult};
use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::Write;

/// Heading levels in display order
const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

pub struct Reporter;

impl Reporter {
    pub fn generate_report(url: &str, result: AnalysisResult) -> AnalysisReport {
        AnalysisReport {
            url: url.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            result,
        }
    }

    /// Heading counts for h1..h6, zero for levels the page does not use
    pub fn heading_rows(result: &AnalysisResult) -> Vec<(&'static str, usize)> {
        HEADING_LEVELS
            .iter()
            .map(|level| (*level, result.header_counts.get(*level).copied().unwrap_or(0)))
            .collect()
    }

    pub fn print_text_report(report: &AnalysisReport) {
        let result = &report.result;

        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "pagelens - Page Analysis Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), report.url);
        println!("{}: {}", "Timestamp".bright_white().bold(), report.timestamp);
        println!();

        if let Some(message) = &result.error_message {
            println!("{} {}", "Analysis failed:".bright_red().bold(), message);
            println!();
            println!("{}", "=".repeat(80).bright_blue());
            return;
        }

        println!("{}", "Document".bright_yellow().bold().underline());
        println!("  HTML Version: {}", result.markup_version.bright_green());
        println!(
            "  Title:        {}",
            if result.title.is_empty() {
                "(none)".dimmed()
            } else {
                result.title.bright_white()
            }
        );
        println!(
            "  Login Form:   {}",
            if result.has_login_form {
                "yes".bright_green()
            } else {
                "no".dimmed()
            }
        );
        println!();

        println!("{}", "Headings".bright_yellow().bold().underline());
        for (level, count) in Self::heading_rows(result) {
            let count = if count > 0 {
                count.to_string().bright_green()
            } else {
                count.to_string().dimmed()
            };
            println!("  {}: {}", level.to_uppercase(), count);
        }
        println!("  Total: {}", result.total_headers());
        println!();

        println!("{}", "Links".bright_yellow().bold().underline());
        println!("  Total:        {}", result.total_links());
        println!(
            "  Internal:     {}",
            result.internal_link_count.to_string().bright_green()
        );
        println!(
            "  External:     {}",
            result.external_link_count.to_string().bright_green()
        );
        println!(
            "  Inaccessible: {}",
            if result.inaccessible_link_count > 0 {
                result.inaccessible_link_count.to_string().bright_red()
            } else {
                result.inaccessible_link_count.to_string().bright_green()
            }
        );

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    pub fn print_json_report(report: &AnalysisReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        println!("{}", json);
        Ok(())
    }

    pub fn save_json_report(report: &AnalysisReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)
            .with_context(|| format!("Failed to create report file: {}", filename))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write report file: {}", filename))?;
        eprintln!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}
