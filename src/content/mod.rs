//! Heuristic scan of live page content.
//!
//! The content scan is an independent, best-effort signal: it fetches the
//! page, looks at its title, meta description, and form fields, and reports
//! [`ContentVerdict::Suspicious`] or [`ContentVerdict::Normal`]. Any failure
//! to retrieve the page becomes [`ContentVerdict::Unreachable`] rather than an
//! error. The result is never mixed into the classifier probability.
//!
//! # Example
//!
//! ```no_run
//! use phishguard::content::{ContentScanner, HttpFetcher};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = HttpFetcher::new(Duration::from_secs(10), "Mozilla/5.0")?;
//!     let scanner = ContentScanner::new(fetcher);
//!     let verdict = scanner.scan("https://example.com").await?;
//!     println!("{}", verdict.message());
//!     Ok(())
//! }
//! ```

mod html;
mod http;

pub use html::{analyze_html, PageSummary};
pub use http::{HttpFetcher, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

use crate::error::{validate_url, ScanError};
use crate::features::count_keywords;
use crate::model::{ContentFindings, ContentVerdict};
use async_trait::async_trait;
use thiserror::Error;

/// Keywords counted in the page title and meta description.
pub const CONTENT_KEYWORDS: [&str; 8] = [
    "login", "signin", "verify", "bank", "account", "password", "secure", "update",
];

/// Keyword hits at or above which a page is suspicious.
pub const KEYWORD_HIT_THRESHOLD: usize = 2;

/// Why a page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),
}

/// Retrieves the HTML body of a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the body of a `200 OK` response.
    ///
    /// # Errors
    ///
    /// Any other status, or any transport failure, is a [`FetchError`].
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct ContentScanner<F = HttpFetcher> {
    fetcher: F,
}

impl<F: PageFetcher> ContentScanner<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches `url` and scores its content.
    ///
    /// # Errors
    ///
    /// Only blank input is an error; network problems produce
    /// [`ContentVerdict::Unreachable`].
    pub async fn scan(&self, url: &str) -> Result<ContentVerdict, ScanError> {
        validate_url(url)?;

        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url, error = %e, "page unreachable");
                return Ok(ContentVerdict::Unreachable {
                    reason: e.to_string(),
                });
            }
        };

        let verdict = classify_page(&analyze_html(&body));
        tracing::info!(url, verdict = verdict.as_str(), "content scanned");
        Ok(verdict)
    }
}

/// Applies the keyword and password-field rules to a parsed page.
pub fn classify_page(page: &PageSummary) -> ContentVerdict {
    let text = format!("{}{}", page.title, page.description).to_lowercase();
    let findings = ContentFindings {
        title: page.title.clone(),
        description: page.description.clone(),
        keyword_hits: count_keywords(&text, &CONTENT_KEYWORDS),
        has_password_field: page.has_password_field,
    };

    if findings.keyword_hits >= KEYWORD_HIT_THRESHOLD || findings.has_password_field {
        ContentVerdict::Suspicious(findings)
    } else {
        ContentVerdict::Normal(findings)
    }
}
