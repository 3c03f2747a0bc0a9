use thiserror::Error;

/// Reasons an analysis can fail before a report is produced.
///
/// Extraction and per-link probing never fail; only validating the target URL
/// and fetching the page can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The target page could not be reached or its body could not be read
    #[error("The provided URL is not reachable ({0})")]
    Fetch(String),

    /// The target page answered with something other than 200 OK
    #[error("{}", describe_status(.0))]
    HttpStatus(u16),

    /// The target URL was rejected before any request was made
    #[error("The provided URL is invalid: {0}")]
    MalformedInput(String),
}

impl AnalysisError {
    /// Status code carried by an [`AnalysisError::HttpStatus`] failure
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AnalysisError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Human readable explanation for the status codes users run into most often
pub fn status_explanation(code: u16) -> Option<&'static str> {
    let explanation = match code {
        301 => "Moved Permanently: The content you are looking for has been moved to a new location.",
        302 => "Found: The content has been found, but it temporarily resides at a different location.",
        400 => "Bad Request: The request was not formed correctly.",
        401 => "Unauthorized: Authentication credentials are required to access this content.",
        403 => "Forbidden: Access to the requested resource is denied.",
        404 => "Not Found: The requested content could not be found.",
        429 => "Too Many Requests. Please try again later.",
        500 => "Internal Server Error: An error has occurred on the server side.",
        502 => "Bad Gateway: Received an invalid response from the upstream server.",
        503 => "Service Unavailable: The server is currently unable to handle the request.",
        504 => {
            "Gateway Timeout: The server acted as a gateway or proxy and did not receive a timely response from the upstream server."
        }
        _ => return None,
    };

    Some(explanation)
}

fn describe_status(code: &u16) -> String {
    match status_explanation(*code) {
        Some(explanation) => format!("HTTP status code: {} - {}", code, explanation),
        None => format!("HTTP status code: {}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_has_explanation() {
        let err = AnalysisError::HttpStatus(404);
        assert_eq!(
            err.to_string(),
            "HTTP status code: 404 - Not Found: The requested content could not be found."
        );
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_unknown_status_has_only_code() {
        let err = AnalysisError::HttpStatus(418);
        assert_eq!(err.to_string(), "HTTP status code: 418");
    }

    #[test]
    fn test_fetch_error_carries_cause() {
        let err = AnalysisError::Fetch("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.status_code(), None);
    }
}
