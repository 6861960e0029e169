//! Phishing classifiers.
//!
//! A [`Classifier`] maps a [`FeatureVector`] to the probability of the
//! phishing class. Classifiers are built once at start-up and handed to the
//! [`UrlScanner`](crate::scanner::UrlScanner) explicitly; inference only reads
//! immutable model state, so one instance can be shared freely.
//!
//! # Example
//!
//! ```no_run
//! use phishguard::classifier::{Classifier, ForestClassifier};
//! use phishguard::features::extract;
//! use std::path::Path;
//!
//! let model = ForestClassifier::load(Path::new("phishing_model.json"))?;
//! let p = model.predict_proba(&extract("http://verify-account.example"));
//! println!("phishing probability: {:.2}", p);
//! # Ok::<(), phishguard::classifier::ModelError>(())
//! ```

mod forest;

pub use forest::{ForestClassifier, Node, Tree};

use crate::model::FeatureVector;
use std::path::PathBuf;
use thiserror::Error;

/// Trait for binary phishing classifiers.
pub trait Classifier: Send + Sync {
    /// Returns the human-readable name of this classifier.
    fn name(&self) -> &'static str;

    /// Probability in `[0, 1]` that `features` describe a phishing URL.
    fn predict_proba(&self, features: &FeatureVector) -> f64;
}

/// Failure to load a persisted model. Always fatal at start-up.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model file {path} is not a valid forest artifact: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model: {0}")]
    Invalid(String),
}
