pub mod classifier;
pub mod config;
pub mod content;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod output;
pub mod report;
pub mod scanner;
pub mod session;
pub mod trusted;

pub use classifier::{Classifier, ForestClassifier, ModelError};
pub use config::Config;
pub use content::ContentScanner;
pub use error::ScanError;
pub use model::{ContentFindings, ContentVerdict, FeatureVector, RiskLevel, ScanResult, Verdict};
pub use scanner::UrlScanner;
pub use session::{Session, Tier};
pub use trusted::TrustedDomains;
