use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label reported when no known doctype declaration is found
pub const UNKNOWN_VERSION: &str = "unknown HTML version";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub markup_version: String,
    pub title: String,
    pub header_counts: HashMap<String, usize>,
    pub internal_link_count: usize,
    pub external_link_count: usize,
    pub inaccessible_link_count: usize,
    pub has_login_form: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            markup_version: UNKNOWN_VERSION.to_string(),
            title: String::new(),
            header_counts: HashMap::new(),
            internal_link_count: 0,
            external_link_count: 0,
            inaccessible_link_count: 0,
            has_login_form: false,
            error_message: None,
        }
    }
}

impl AnalysisResult {
    /// Result carrying only a failure description, as rendered for failed analyses
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn total_links(&self) -> usize {
        self.internal_link_count + self.external_link_count
    }

    pub fn total_headers(&self) -> usize {
        self.header_counts.values().sum()
    }
}

/// Links found in a document, split by host, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLinks {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

impl ClassifiedLinks {
    pub fn total(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    /// Internal links followed by external links, the order they are probed in
    pub fn all(&self) -> Vec<String> {
        self.internal
            .iter()
            .chain(self.external.iter())
            .cloned()
            .collect()
    }
}

/// Everything the single markup pass pulls out of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSignals {
    pub header_counts: HashMap<String, usize>,
    pub title: String,
    pub has_login_form: bool,
    pub links: ClassifiedLinks,
}

/// A fetched document as handed over by the fetch collaborator
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    /// Host of the final URL after redirects, with an explicit port if any
    pub host: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub timestamp: String,
    pub result: AnalysisResult,
}
