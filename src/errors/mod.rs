/// Context for failed requests
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Context for non-success responses
pub fn status_context(url: &str) -> String {
    format!("Unexpected status from: {}", url)
}

/// Context for bodies that do not decode
pub fn parse_context(url: &str) -> String {
    format!("Failed to parse response from: {}", url)
}
