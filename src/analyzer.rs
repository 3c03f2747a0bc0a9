use crate::error::AnalysisError;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::html_version::detect_html_version;
use crate::http_client::build_http_client;
use crate::link_checker::{HttpLinkProber, LinkChecker, LinkProber};
use crate::models::AnalysisResult;
use crate::scanner::scan_page;
use anyhow::Result;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Settings for the HTTP-backed analyzer
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Maximum number of links probed at the same time
    pub concurrency: usize,
    /// Deadline for the page fetch and for every link probe
    pub timeout: Duration,
    /// Optional cap on link probes per second
    pub requests_per_second: Option<f64>,
    pub progress_bar: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            concurrency: 10,
            timeout: Duration::from_secs(10),
            requests_per_second: None,
            progress_bar: false,
        }
    }
}

/// Stage of one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Idle,
    Fetching,
    Extracting,
    Probing,
    Done,
    Failed,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisStage::Idle => "idle",
            AnalysisStage::Fetching => "fetching",
            AnalysisStage::Extracting => "extracting",
            AnalysisStage::Probing => "probing",
            AnalysisStage::Done => "done",
            AnalysisStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Validates a target URL before anything is sent over the network
pub fn parse_target_url(input: &str) -> Result<Url, AnalysisError> {
    let input = input.trim();
    let url = Url::parse(input)
        .map_err(|e| AnalysisError::MalformedInput(format!("{} ({})", input, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AnalysisError::MalformedInput(format!(
                "unsupported scheme '{}': only http and https are supported",
                scheme
            )));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AnalysisError::MalformedInput(format!("{} has no host", input)));
    }

    Ok(url)
}

/// Runs the whole page analysis: fetch, extract, probe
pub struct Analyzer<F, P> {
    fetcher: F,
    link_checker: LinkChecker<P>,
}

impl Analyzer<HttpFetcher, HttpLinkProber> {
    /// Analyzer talking to the network through one shared reqwest client
    pub fn from_options(options: &AnalyzerOptions) -> Result<Self> {
        let client = build_http_client(options.timeout)?;

        let mut link_checker = LinkChecker::new(
            HttpLinkProber::new(client.clone(), options.requests_per_second),
            options.concurrency,
            options.timeout,
        );
        if options.progress_bar {
            link_checker.enable_progress_bar();
        }

        Ok(Self::new(HttpFetcher::new(client), link_checker))
    }
}

impl<F: PageFetcher, P: LinkProber> Analyzer<F, P> {
    pub fn new(fetcher: F, link_checker: LinkChecker<P>) -> Self {
        Self {
            fetcher,
            link_checker,
        }
    }

    /// Fetches `url` and analyzes the page it resolves to.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::MalformedInput`] for an unusable URL,
    /// [`AnalysisError::Fetch`] when the page cannot be retrieved and
    /// [`AnalysisError::HttpStatus`] when it answers with anything but 200.
    pub async fn analyze_page(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        Self::enter(AnalysisStage::Idle, url);
        let target = parse_target_url(url).inspect_err(|e| Self::failed(url, e))?;

        Self::enter(AnalysisStage::Fetching, url);
        let page = self
            .fetcher
            .fetch(&target)
            .await
            .inspect_err(|e| Self::failed(url, e))?;

        if page.status != 200 {
            let err = AnalysisError::HttpStatus(page.status);
            Self::failed(url, &err);
            return Err(err);
        }

        let result = self.analyze(&page.host, &page.body).await;
        Self::enter(AnalysisStage::Done, url);

        Ok(result)
    }

    /// Analyzes an already fetched document. `origin_host` is the host the
    /// document was served from and decides which links are internal.
    pub async fn analyze(&self, origin_host: &str, body: &str) -> AnalysisResult {
        Self::enter(AnalysisStage::Extracting, origin_host);
        let markup_version = detect_html_version(body);
        let signals = scan_page(body, origin_host);

        tracing::debug!(
            markup_version,
            title = %signals.title,
            links = signals.links.total(),
            internal = signals.links.internal.len(),
            external = signals.links.external.len(),
            "Extracted page signals"
        );

        Self::enter(AnalysisStage::Probing, origin_host);
        let inaccessible_link_count = self
            .link_checker
            .count_inaccessible(&signals.links.all())
            .await;

        AnalysisResult {
            markup_version: markup_version.to_string(),
            title: signals.title,
            header_counts: signals.header_counts,
            internal_link_count: signals.links.internal.len(),
            external_link_count: signals.links.external.len(),
            inaccessible_link_count,
            has_login_form: signals.has_login_form,
            error_message: None,
        }
    }

    fn enter(stage: AnalysisStage, target: &str) {
        tracing::debug!(target_url = %target, stage = %stage, "Analysis stage");
    }

    fn failed(url: &str, error: &AnalysisError) {
        tracing::warn!(
            url = %url,
            stage = %AnalysisStage::Failed,
            status = ?error.status_code(),
            error = %error,
            "Analysis failed"
        );
    }
}
