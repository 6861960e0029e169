//! URL classification with the trusted-domain override.
//!
//! [`UrlScanner`] owns the decision policy: a URL containing a trusted
//! domain is always safe; anything else is phishing when the classifier's
//! probability exceeds [`PHISHING_THRESHOLD`](crate::model::PHISHING_THRESHOLD).

use crate::classifier::Classifier;
use crate::error::{validate_url, ScanError};
use crate::features;
use crate::model::{RiskLevel, ScanResult, Verdict};
use crate::trusted::TrustedDomains;
use chrono::Utc;
use std::sync::Arc;

pub struct UrlScanner {
    classifier: Arc<dyn Classifier>,
    trusted: TrustedDomains,
}

impl UrlScanner {
    pub fn new(classifier: Arc<dyn Classifier>, trusted: TrustedDomains) -> Self {
        Self {
            classifier,
            trusted,
        }
    }

    pub fn trusted(&self) -> &TrustedDomains {
        &self.trusted
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Classifies `url`.
    ///
    /// The model is consulted even for trusted URLs so the detailed view can
    /// still report its probability and risk band.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::EmptyUrl`] for blank input.
    pub fn scan(&self, url: &str) -> Result<ScanResult, ScanError> {
        validate_url(url)?;

        let is_trusted = self.trusted.matches(url);
        let features = features::extract(url);
        let probability = self.classifier.predict_proba(&features);

        let verdict = if is_trusted {
            Verdict::Safe
        } else {
            Verdict::from_probability(probability)
        };

        tracing::info!(
            url,
            is_trusted,
            probability,
            verdict = verdict.as_str(),
            "url scanned"
        );

        Ok(ScanResult {
            url: url.to_string(),
            is_trusted,
            probability,
            verdict,
            risk_level: RiskLevel::from_probability(probability),
            features,
            scanned_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeatureVector;

    struct FixedClassifier(f64);

    impl Classifier for FixedClassifier {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn predict_proba(&self, _features: &FeatureVector) -> f64 {
            self.0
        }
    }

    fn scanner(p: f64) -> UrlScanner {
        UrlScanner::new(Arc::new(FixedClassifier(p)), TrustedDomains::default())
    }

    #[test]
    fn test_trusted_domain_is_always_safe() {
        let result = scanner(0.99).scan("https://www.sbi.co.in/login").unwrap();
        assert!(result.is_trusted);
        assert_eq!(result.verdict, Verdict::Safe);
        // Risk band still follows the model.
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_untrusted_above_threshold_is_phishing() {
        let result = scanner(0.6).scan("http://secure-login-bank.com").unwrap();
        assert!(!result.is_trusted);
        assert_eq!(result.verdict, Verdict::Phishing);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.features.suspicious_count, 3);
    }

    #[test]
    fn test_untrusted_at_threshold_is_safe() {
        let result = scanner(0.5).scan("http://example.com").unwrap();
        assert_eq!(result.verdict, Verdict::Safe);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(scanner(0.1).scan("   ").unwrap_err(), ScanError::EmptyUrl);
    }

    #[test]
    fn test_result_keeps_raw_url() {
        let result = scanner(0.1).scan("HTTP://Example.com").unwrap();
        assert_eq!(result.url, "HTTP://Example.com");
        assert_eq!(scanner(0.1).classifier_name(), "fixed");
    }

    #[test]
    fn test_extra_trusted_domains_apply() {
        let trusted = TrustedDomains::with_extra(&["intranet.example".to_string()]);
        let defaults = TrustedDomains::default().len();
        let scanner = UrlScanner::new(Arc::new(FixedClassifier(0.9)), trusted);
        assert_eq!(scanner.trusted().len(), defaults + 1);

        let result = scanner.scan("http://login.intranet.example").unwrap();
        assert!(result.is_trusted);
        assert_eq!(result.verdict, Verdict::Safe);
    }
}
