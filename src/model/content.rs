use serde::{Deserialize, Serialize};

/// What was found in a fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFindings {
    pub title: String,
    pub description: String,
    pub keyword_hits: usize,
    pub has_password_field: bool,
}

/// Result of a content scan. `Unreachable` is not a content judgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ContentVerdict {
    Unreachable { reason: String },
    Suspicious(ContentFindings),
    Normal(ContentFindings),
}

impl ContentVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentVerdict::Unreachable { .. } => "unreachable",
            ContentVerdict::Suspicious(_) => "suspicious",
            ContentVerdict::Normal(_) => "normal",
        }
    }

    pub fn findings(&self) -> Option<&ContentFindings> {
        match self {
            ContentVerdict::Unreachable { .. } => None,
            ContentVerdict::Suspicious(f) | ContentVerdict::Normal(f) => Some(f),
        }
    }

    pub fn is_suspicious(&self) -> bool {
        matches!(self, ContentVerdict::Suspicious(_))
    }

    pub fn message(&self) -> String {
        match self {
            ContentVerdict::Unreachable { .. } => "Cannot reach this website".to_string(),
            ContentVerdict::Suspicious(f) => format!(
                "Suspicious website content detected (score: {})",
                f.keyword_hits
            ),
            ContentVerdict::Normal(_) => "Website content looks normal".to_string(),
        }
    }
}
