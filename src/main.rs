use anyhow::Result;
use clap::Parser;
use colored::*;
use pagelens::cli::Cli;
use pagelens::run;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "pagelens=debug" } else { "pagelens=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(report) if report.result.error_message.is_some() => std::process::exit(1),
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            std::process::exit(1);
        }
    }
}
