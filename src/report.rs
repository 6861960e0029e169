//! Plain-text scan reports.
//!
//! Reports are a premium feature: [`build_report`] refuses free sessions.

use crate::model::ScanResult;
use crate::session::Session;
use chrono::Local;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Suggested file name for a downloaded report.
pub const DEFAULT_REPORT_NAME: &str = "phishguard_report.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("reports are available to premium users only (signed in as {0})")]
    NotPremium(String),

    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the report text for `result`.
pub fn render_report(result: &ScanResult) -> String {
    let date = result
        .scanned_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");

    format!(
        "PhishGuard AI - Scan Report\n\
         --------------------------\n\
         URL: {}\n\
         Trusted Domain: {}\n\
         Verdict: {}\n\
         Risk Level: {}\n\
         Probability: {:.2}%\n\
         Date: {}\n",
        result.url,
        result.is_trusted,
        result.verdict.display_name(),
        result.risk_level.display_name(),
        result.probability * 100.0,
        date
    )
}

/// Renders the report if `session` is allowed to have one.
pub fn build_report(session: &Session, result: &ScanResult) -> Result<String, ReportError> {
    if !session.is_premium() {
        return Err(ReportError::NotPremium(session.username.clone()));
    }
    Ok(render_report(result))
}

/// Builds the report and writes it to `path`.
pub fn write_report(session: &Session, result: &ScanResult, path: &Path) -> Result<(), ReportError> {
    let report = build_report(session, result)?;
    fs::write(path, report)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
