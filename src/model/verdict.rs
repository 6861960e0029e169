use super::FeatureVector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Probability above which a URL is classified as phishing.
pub const PHISHING_THRESHOLD: f64 = 0.5;

/// Probability above which a URL is banded as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Phishing,
}

impl Verdict {
    /// Classifies a bare model probability, ignoring the trusted-domain override.
    pub fn from_probability(probability: f64) -> Self {
        if probability > PHISHING_THRESHOLD {
            Verdict::Phishing
        } else {
            Verdict::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Phishing => "phishing",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Phishing => "Phishing",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if probability > PHISHING_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of classifying one URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    pub is_trusted: bool,
    pub probability: f64,
    pub verdict: Verdict,
    pub risk_level: RiskLevel,
    pub features: FeatureVector,
    pub scanned_at: DateTime<Utc>,
}

impl ScanResult {
    /// Probability of the reported verdict: `p` for phishing, `1 - p` for safe.
    pub fn confidence(&self) -> f64 {
        match self.verdict {
            Verdict::Phishing => self.probability,
            Verdict::Safe => 1.0 - self.probability,
        }
    }

    pub fn is_phishing(&self) -> bool {
        self.verdict == Verdict::Phishing
    }

    /// Advice shown alongside the detailed analysis.
    pub fn recommended_action(&self) -> &'static str {
        if self.probability > PHISHING_THRESHOLD {
            "Do NOT click or enter personal details. Verify through the official website or mobile app."
        } else {
            "URL looks safe, but always stay cautious."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(probability: f64, verdict: Verdict) -> ScanResult {
        ScanResult {
            url: "http://example.com".to_string(),
            is_trusted: false,
            probability,
            verdict,
            risk_level: RiskLevel::from_probability(probability),
            features: crate::features::extract("http://example.com"),
            scanned_at: Utc::now(),
        }
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(RiskLevel::from_probability(0.85), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.6), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.3), RiskLevel::Low);
    }

    #[test]
    fn test_risk_band_edges_are_exclusive() {
        assert_eq!(RiskLevel::from_probability(0.8), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn test_verdict_threshold() {
        assert_eq!(Verdict::from_probability(0.5), Verdict::Safe);
        assert_eq!(Verdict::from_probability(0.51), Verdict::Phishing);
    }

    #[test]
    fn test_confidence() {
        let phishing = result(0.9, Verdict::Phishing);
        assert!((phishing.confidence() - 0.9).abs() < 1e-9);

        let safe = result(0.25, Verdict::Safe);
        assert!((safe.confidence() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_recommended_action_follows_probability() {
        // Trusted overrides keep the verdict safe but the advice tracks the model.
        let trusted_but_risky = result(0.7, Verdict::Safe);
        assert!(trusted_but_risky.recommended_action().starts_with("Do NOT"));
        assert!(result(0.2, Verdict::Safe)
            .recommended_action()
            .starts_with("URL looks safe"));
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let json = serde_json::to_string(&Verdict::Phishing).unwrap();
        assert_eq!(json, "\"phishing\"");
    }
}
