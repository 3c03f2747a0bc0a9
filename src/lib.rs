pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod header_counter;
pub mod html_version;
pub mod http_client;
pub mod link_checker;
pub mod link_extractor;
pub mod login_form_detector;
pub mod models;
pub mod reporter;
pub mod scanner;
pub mod tag;
pub mod title_extractor;

use analyzer::{Analyzer, AnalyzerOptions, parse_target_url};
use anyhow::Result;
use cli::Cli;
use colored::*;
use config::Config;
use models::{AnalysisReport, AnalysisResult};
use reporter::Reporter;
use std::time::Duration;

/// Analyzes the page named on the command line and prints the report.
///
/// An invalid URL or configuration is returned as an error. A page that
/// cannot be fetched still produces a report, with `error_message` set.
pub async fn run(args: Cli) -> Result<AnalysisReport> {
    let args = match Config::load(&args)? {
        Some(config) => config.merge_with_cli(&args),
        None => args,
    };

    let json_output = args.output == "json";

    if !json_output {
        println!(
            "{}",
            "pagelens - Web Page Analyzer".bright_cyan().bold()
        );
        println!("{}", "=".repeat(50).bright_blue());
        println!();
    }

    parse_target_url(&args.url)?;

    tracing::info!(
        url = %args.url,
        concurrency = args.concurrency,
        timeout_secs = args.timeout,
        "Starting analysis"
    );

    let options = AnalyzerOptions {
        concurrency: args.concurrency,
        timeout: Duration::from_secs(args.timeout),
        requests_per_second: args.rate_limit,
        progress_bar: args.progress && !json_output,
    };
    let analyzer = Analyzer::from_options(&options)?;

    let result = match analyzer.analyze_page(&args.url).await {
        Ok(result) => {
            tracing::info!(
                internal = result.internal_link_count,
                external = result.external_link_count,
                inaccessible = result.inaccessible_link_count,
                "Analysis complete"
            );
            result
        }
        Err(e) => AnalysisResult::failed(e.to_string()),
    };

    let report = Reporter::generate_report(&args.url, result);

    if json_output {
        Reporter::print_json_report(&report)?;
    } else {
        Reporter::print_text_report(&report);
    }

    if let Some(filename) = &args.save {
        Reporter::save_json_report(&report, filename)?;
    }

    Ok(report)
}
