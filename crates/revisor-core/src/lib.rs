//! Revisor Core Library
//!
//! Deterministic rubric scoring: seed derivation, the legacy-compatible
//! generator, the scoring engine, batch running, statistics and reports.

pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod records;
pub mod report;
pub mod rng;
pub mod rubric;
pub mod rubric_doc;
pub mod scoring;
pub mod seed;
pub mod session;
pub mod stats;

pub use batch::{Batch, BatchProgress, BatchRunner, PreparedBatch};
pub use rubric::{Rubric, RubricCriterion, Tier};
pub use scoring::{evaluate, CriterionResult, DrawSequence, EvaluationResult, Scorer};
pub use seed::derive_seed;
