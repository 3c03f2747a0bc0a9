use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use governor::{
    Quota, RateLimiter, clock::DefaultClock, state::InMemoryState, state::direct::NotKeyed,
};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use std::num::NonZeroU32;
use std::time::Duration;

/// Only links starting with this prefix are probed over the network
const PROBE_PREFIX: &str = "http";

/// Answers whether a single link is reachable
#[async_trait]
pub trait LinkProber: Send + Sync {
    /// Waits until the prober may send its next request. Runs before the
    /// probe deadline starts.
    async fn wait_for_slot(&self) {}

    async fn is_accessible(&self, url: &str) -> bool;
}

/// Probes a link with one GET request; only `200 OK` counts as accessible
pub struct HttpLinkProber {
    client: reqwest::Client,
    rate_limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl HttpLinkProber {
    pub fn new(client: reqwest::Client, requests_per_second: Option<f64>) -> Self {
        let rate_limiter = requests_per_second
            .and_then(|rps| NonZeroU32::new(rps.ceil() as u32))
            .map(|rps| RateLimiter::direct(Quota::per_second(rps)));

        Self {
            client,
            rate_limiter,
        }
    }
}

#[async_trait]
impl LinkProber for HttpLinkProber {
    async fn wait_for_slot(&self) {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }
    }

    async fn is_accessible(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                tracing::debug!(url = %url, status = %response.status(), "Link is not accessible");
                false
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Link probe failed");
                false
            }
        }
    }
}

/// Splits links into the trimmed ones worth probing and the number of links
/// rejected up front for not starting with `http`
pub fn partition_probe_targets(links: &[String]) -> (Vec<&str>, usize) {
    let mut targets = Vec::with_capacity(links.len());
    let mut rejected = 0;

    for link in links {
        let link = link.trim();
        if link.starts_with(PROBE_PREFIX) {
            targets.push(link);
        } else {
            rejected += 1;
        }
    }

    (targets, rejected)
}

/// Probes every link of a page and counts the inaccessible ones.
///
/// At most `concurrency` probes run at once and each one is cut off after
/// `probe_timeout`. The count is only returned once every probe has finished.
pub struct LinkChecker<P> {
    prober: P,
    concurrency: usize,
    probe_timeout: Duration,
    progress_bar: Option<ProgressBar>,
}

impl<P: LinkProber> LinkChecker<P> {
    pub fn new(prober: P, concurrency: usize, probe_timeout: Duration) -> Self {
        Self {
            prober,
            concurrency: concurrency.max(1),
            probe_timeout,
            progress_bar: None,
        }
    }

    /// Show a progress bar while probing
    pub fn enable_progress_bar(&mut self) {
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} links checked {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let pb = ProgressBar::new(0);
        pb.set_style(style);
        self.progress_bar = Some(pb);
    }

    pub async fn count_inaccessible(&self, links: &[String]) -> usize {
        let (targets, rejected) = partition_probe_targets(links);

        tracing::debug!(
            probed = targets.len(),
            rejected,
            concurrency = self.concurrency,
            "Checking links"
        );

        if let Some(pb) = &self.progress_bar {
            pb.set_length(targets.len() as u64);
            pb.set_position(0);
        }

        let failed = stream::iter(targets)
            .map(|link| self.probe(link))
            .buffer_unordered(self.concurrency)
            .fold(0usize, |failed, accessible| async move {
                if accessible { failed } else { failed + 1 }
            })
            .await;

        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} inaccessible", failed + rejected));
        }

        failed + rejected
    }

    async fn probe(&self, link: &str) -> bool {
        self.prober.wait_for_slot().await;

        let accessible =
            match tokio::time::timeout(self.probe_timeout, self.prober.is_accessible(link)).await {
                Ok(accessible) => accessible,
                Err(_) => {
                    tracing::debug!(url = %link, timeout = ?self.probe_timeout, "Link probe timed out");
                    false
                }
            };

        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }

        accessible
    }
}
