mod cli;
mod json;

pub use cli::print_cli_table;
pub use json::print_json;

use crate::model::{ContentVerdict, FeatureVector, RiskLevel, ScanResult, Verdict};
use crate::session::{Session, Tier};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Output format for scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON format for programmatic use
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use 'table' or 'json'", s)),
        }
    }
}

/// A URL scan as shown to a particular session. Detail fields are only
/// filled in for premium sessions.
#[derive(Debug, Clone, Serialize)]
pub struct UrlScanView {
    pub url: String,
    pub verdict: Verdict,
    pub is_trusted: bool,
    pub confidence: f64,
    pub scanned_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<&'static str>,
}

impl UrlScanView {
    pub fn new(result: &ScanResult, session: &Session) -> Self {
        let premium = session.is_premium();
        Self {
            url: result.url.clone(),
            verdict: result.verdict,
            is_trusted: result.is_trusted,
            confidence: result.confidence(),
            scanned_at: result.scanned_at,
            probability: premium.then_some(result.probability),
            risk_level: premium.then_some(result.risk_level),
            features: premium.then_some(result.features),
            recommended_action: premium.then(|| result.recommended_action()),
        }
    }

    pub fn is_detailed(&self) -> bool {
        self.risk_level.is_some()
    }
}

/// Everything one invocation has to print.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutput {
    pub user: String,
    pub tier: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_scan: Option<UrlScanView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentVerdict>,
}

impl ScanOutput {
    pub fn new(session: &Session) -> Self {
        Self {
            user: session.username.clone(),
            tier: session.tier,
            url_scan: None,
            content: None,
        }
    }

    pub fn with_url_scan(mut self, result: &ScanResult, session: &Session) -> Self {
        self.url_scan = Some(UrlScanView::new(result, session));
        self
    }

    pub fn with_content(mut self, verdict: ContentVerdict) -> Self {
        self.content = Some(verdict);
        self
    }
}

pub fn print_result(output: &ScanOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_cli_table(output),
        OutputFormat::Json => print_json(output),
    }
}

/// Format result to string for file output
pub fn format_result_to_string(output: &ScanOutput) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}
