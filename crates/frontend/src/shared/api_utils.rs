//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::shared::constants::API_PREFIX;

/// Get the base URL for API requests
///
/// Constructs the backend base URL from the current window location,
/// using port 5000 for the backend server.
///
/// # Returns
/// - Base URL like "http://localhost:5000" or "https://example.com:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Reduce a failed response to a toast line, preferring the backend's
/// structured error body over the caller's fallback string.
pub async fn response_error(response: gloo_net::http::Response, fallback: &str) -> String {
    let raw = response.text().await.unwrap_or_default();
    contracts::shared::api_error::ApiErrorBody::extract(&raw, fallback)
}

/// Build a full API URL from a path under the versioned prefix
///
/// # Example
/// ```ignore
/// let url = api_url("/docs/category");
/// // http://localhost:5000/api/v1/docs/category
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", api_base(), API_PREFIX, path)
}
