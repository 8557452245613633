//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building an HTTP client with the configured user agent
//! - GET requests against the paginated listing URL
//! - Error classification without raising

use reqwest::Client;
use std::time::Duration;

/// Result of fetching one listing page
///
/// Fetching never returns an `Err`: every failure mode maps to a
/// variant the coordinator inspects, so a bad page costs zero records
/// and nothing else.
#[derive(Debug)]
pub enum PageFetchResult {
    /// HTTP 200 with the response body as text
    Success {
        /// Raw page markup
        body: String,
    },

    /// Any non-200 status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Transport-level failure (DNS, timeout, connection refused)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for the whole harvest
///
/// The target site rejects requests without a browser-identifying
/// User-Agent, so the configured one is set on every request.
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page
///
/// The request URL is the base URL with the page index appended
/// verbatim, e.g. `https://ssr1.scrape.center/page/3`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - The listing URL template
/// * `page_index` - 1-based page number
///
/// # Returns
///
/// A [`PageFetchResult`] indicating success or the type of failure
pub async fn fetch_page(client: &Client, base_url: &str, page_index: u32) -> PageFetchResult {
    let url = format!("{}{}", base_url, page_index);

    match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return PageFetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => PageFetchResult::Success { body },
                Err(e) => PageFetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                PageFetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                PageFetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                PageFetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
