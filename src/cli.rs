use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "text";
pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Debug, Clone)]
#[command(name = "pagelens")]
#[command(
    about = "Analyze a web page: HTML version, title, headings, login forms and link health",
    long_about = None
)]
pub struct Cli {
    /// The URL of the page to analyze
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format: text or json
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Save the report as JSON to this file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of links checked concurrently
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Timeout in seconds for the page request and for each link check
    #[arg(
        short = 't',
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Rate limit for link checks per second (optional, e.g., 5.0)
    #[arg(short = 'r', long)]
    pub rate_limit: Option<f64>,

    /// Show a progress bar while checking links
    #[arg(short, long)]
    pub progress: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
