use super::{Classifier, ModelError};
use crate::model::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One node of a decision tree, stored in a flat array.
///
/// Split nodes send `x[feature] <= threshold` to `left`, everything else to
/// `right`. Leaves hold per-class sample weights `[safe, phishing]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: [f64; 2],
    },
}

/// A decision tree whose root is `nodes[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Phishing-class fraction at the leaf reached by `row`.
    fn phishing_fraction(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { value } => return value[1] / (value[0] + value[1]),
            }
        }
    }

    fn validate(&self, tree_idx: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid(format!("tree {} has no nodes", tree_idx)));
        }

        let len = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(ModelError::Invalid(format!(
                            "tree {} node {} splits on feature {}, model has {}",
                            tree_idx, i, feature, FEATURE_COUNT
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::Invalid(format!(
                            "tree {} node {} has a non-finite threshold",
                            tree_idx, i
                        )));
                    }
                    // Children must come after their parent, which also rules out cycles.
                    for child in [*left, *right] {
                        if child <= i || child >= len {
                            return Err(ModelError::Invalid(format!(
                                "tree {} node {} has out-of-order child {}",
                                tree_idx, i, child
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    let valid = value.iter().all(|v| v.is_finite() && *v >= 0.0)
                        && value[0] + value[1] > 0.0;
                    if !valid {
                        return Err(ModelError::Invalid(format!(
                            "tree {} leaf {} has invalid class weights {:?}",
                            tree_idx, i, value
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct ForestArtifact {
    n_features: usize,
    n_classes: usize,
    trees: Vec<Tree>,
}

/// Random forest classifier; probability is the mean leaf class fraction
/// across all trees.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    trees: Vec<Tree>,
}

impl ForestClassifier {
    /// Builds a classifier from already-parsed trees.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] if the forest is empty or any tree is
    /// malformed.
    pub fn new(trees: Vec<Tree>) -> Result<Self, ModelError> {
        if trees.is_empty() {
            return Err(ModelError::Invalid("forest has no trees".to_string()));
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(Self { trees })
    }

    /// Loads a JSON forest artifact from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, is not valid JSON, or
    /// describes a model with the wrong shape.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: ForestArtifact =
            serde_json::from_str(&content).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if artifact.n_features != FEATURE_COUNT {
            return Err(ModelError::Invalid(format!(
                "model expects {} features, extractor produces {}",
                artifact.n_features, FEATURE_COUNT
            )));
        }
        if artifact.n_classes != 2 {
            return Err(ModelError::Invalid(format!(
                "model has {} classes, expected 2",
                artifact.n_classes
            )));
        }

        let classifier = Self::new(artifact.trees)?;
        tracing::info!(
            path = %path.display(),
            trees = classifier.tree_count(),
            "loaded forest model"
        );
        Ok(classifier)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for ForestClassifier {
    fn name(&self) -> &'static str {
        "Random Forest"
    }

    fn predict_proba(&self, features: &FeatureVector) -> f64 {
        let row = features.to_row();
        let total: f64 = self
            .trees
            .iter()
            .map(|tree| tree.phishing_fraction(&row))
            .sum();
        let p = (total / self.trees.len() as f64).clamp(0.0, 1.0);
        tracing::debug!(probability = p, "forest inference");
        p
    }
}
