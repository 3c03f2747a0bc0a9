use crate::error::AnalysisError;
use crate::link_extractor::host_with_port;
use crate::models::FetchedPage;
use async_trait::async_trait;
use url::Url;

/// Retrieves the page under analysis.
///
/// Implementations report transport failures as [`AnalysisError::Fetch`];
/// any HTTP status, including errors, is returned as a [`FetchedPage`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, AnalysisError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, AnalysisError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AnalysisError::Fetch(e.to_string()))?;

        let status = response.status().as_u16();
        // Links are classified against where we ended up, not where we started
        let host = host_with_port(response.url()).unwrap_or_default();

        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            let content_type = content_type.to_lowercase();
            if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
                tracing::warn!(
                    url = %url,
                    content_type = %content_type,
                    "Non-HTML content type detected, analysis may be meaningless"
                );
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::Fetch(format!("error reading HTML: {}", e)))?;

        Ok(FetchedPage {
            status,
            host,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
