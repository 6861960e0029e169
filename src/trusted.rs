//! Allow-list of official domains exempted from model-based classification.

use serde::Serialize;
use std::collections::BTreeSet;

/// Built-in official banking, payment, and government domains.
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "hdfc.bank",
    "sbi.co.in",
    "icicibank.com",
    "axisbank.com",
    "bankofbaroda.in",
    "pnbindia.in",
    "canarabank.com",
    "unionbankofindia.co.in",
    "indianbank.in",
    "centralbankofindia.co.in",
    "idbibank.in",
    "kotak.com",
    "yesbank.in",
    "rblbank.com",
    "federalbank.co.in",
    "bandhanbank.com",
    "indusind.com",
    "paytm.com",
    "phonepe.com",
    "google.com",
    "amazonpay.in",
    "bhimupi.org",
    "gov.in",
    "nic.in",
    "india.gov.in",
    "uidai.gov.in",
    "incometax.gov.in",
];

/// Fixed set of trusted domains. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct TrustedDomains {
    domains: BTreeSet<String>,
}

impl TrustedDomains {
    /// The built-in list plus `extra` entries (lowercased, blanks dropped).
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = DEFAULT_TRUSTED_DOMAINS
            .iter()
            .map(|d| d.to_string())
            .chain(
                extra
                    .into_iter()
                    .map(|d| d.as_ref().trim().to_lowercase())
                    .filter(|d| !d.is_empty()),
            )
            .collect();
        Self { domains }
    }

    /// True if any trusted domain occurs as a substring of the lowercased URL.
    pub fn matches(&self, url: &str) -> bool {
        let lower = url.to_lowercase();
        self.domains.iter().any(|d| lower.contains(d.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for TrustedDomains {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }
}
