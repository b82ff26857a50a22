//! ALua Sentinel: heuristic AI-vs-human content classifier.
//!
//! Modular structure:
//! - [`features`]: 10-dim linguistic feature extraction
//! - [`patterns`]: Regex authorship rules and score accumulation
//! - [`scoring`]: Statistical heuristics and final aggregation
//! - [`model`]: ONNX predictor with deterministic fallback
//! - [`image`]: Placeholder image classifier
//! - [`report`]: Result shapes and integrity certificate
//! - [`sentinel`]: Facade over all of the above
//! - [`logging`]: Structured logging

pub mod config;
pub mod error;
pub mod features;
pub mod image;
pub mod logging;
pub mod model;
pub mod patterns;
pub mod report;
pub mod scoring;
pub mod sentinel;
pub mod text;

pub use config::SentinelConfig;
pub use error::{ModelError, Result, SentinelError};
pub use features::{FeatureExtractor, FeatureVector};
pub use model::{ModelHandle, ModelState, Predictor};
pub use patterns::{PatternMatcher, ScoreAccumulator};
pub use report::{AnalysisResult, BatchItem, ImageAnalysisResult};
pub use scoring::ScoringEngine;
pub use sentinel::Sentinel;
pub use logging::StructuredLogger;
