use serde::{Deserialize, Serialize};

/// Number of columns in [`FeatureVector::to_row`].
pub const FEATURE_COUNT: usize = 6;

/// Column names in the order the classifier consumes them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "url_length",
    "has_https",
    "num_special",
    "num_digits",
    "has_ip",
    "suspicious_count",
];

/// Lexical statistics of a single URL string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    pub url_length: usize,
    pub has_https: bool,
    pub num_special: usize,
    pub num_digits: usize,
    pub has_ip: bool,
    pub suspicious_count: usize,
}

impl FeatureVector {
    /// Numeric row in [`FEATURE_NAMES`] order, booleans as 0/1.
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.url_length as f64,
            flag(self.has_https),
            self.num_special as f64,
            self.num_digits as f64,
            flag(self.has_ip),
            self.suspicious_count as f64,
        ]
    }

    /// Human-readable (label, value) pairs for the detailed breakdown.
    pub fn breakdown(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Url Length", self.url_length.to_string()),
            ("Has Https", yes_no(self.has_https)),
            ("Num Special", self.num_special.to_string()),
            ("Num Digits", self.num_digits.to_string()),
            ("Has Ip", yes_no(self.has_ip)),
            ("Suspicious Count", self.suspicious_count.to_string()),
        ]
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

fn yes_no(b: bool) -> String {
    if b { "yes" } else { "no" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row_order() {
        let fv = FeatureVector {
            url_length: 20,
            has_https: true,
            num_special: 4,
            num_digits: 3,
            has_ip: false,
            suspicious_count: 2,
        };
        assert_eq!(fv.to_row(), [20.0, 1.0, 4.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn test_breakdown_matches_feature_count() {
        let fv = FeatureVector {
            url_length: 0,
            has_https: false,
            num_special: 0,
            num_digits: 0,
            has_ip: true,
            suspicious_count: 0,
        };
        let breakdown = fv.breakdown();
        assert_eq!(breakdown.len(), FEATURE_COUNT);
        assert_eq!(breakdown[4], ("Has Ip", "yes".to_string()));
    }
}
