//! Core data types for feature vectors, verdicts, and scan results.
//!
//! This module contains the fundamental types used throughout phishguard:
//!
//! - [`FeatureVector`] - Lexical statistics computed from a URL
//! - [`Verdict`] - Safe or phishing classification
//! - [`RiskLevel`] - Banding of the phishing probability
//! - [`ScanResult`] - Complete result of a URL scan
//! - [`ContentVerdict`] - Outcome of a page content scan
//!
//! # Example
//!
//! ```
//! use phishguard::{RiskLevel, Verdict};
//!
//! assert_eq!(RiskLevel::from_probability(0.85), RiskLevel::High);
//! assert_eq!(Verdict::from_probability(0.3), Verdict::Safe);
//! ```

mod content;
mod features;
mod verdict;

pub use content::*;
pub use features::*;
pub use verdict::*;
