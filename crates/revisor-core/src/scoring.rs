//! Deterministic scoring engine
//!
//! Maps a document identifier and a rubric to per-criterion scores, comments
//! and a total. The identifier seeds one [`LegacyRng`] per evaluation, which
//! is then consumed criterion by criterion in rubric order with a fixed draw
//! sequence:
//!
//! 1. normal variate centered at 75% of `max_points` (sd 0.9), rounded
//!    half-to-even and clamped to `[0, max_points]`
//! 2. uniform draw; below 0.08 subtracts `1..=max(1, max_points / 2)`
//! 3. uniform draw; below 0.06 adds `1..=max(1, max_points / 2)`
//! 4. [`DrawSequence::Legacy`] only: one discarded comment-index draw
//!
//! The comment is then picked from the tier of the final score.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, RevisorError};
use crate::rng::LegacyRng;
use crate::rubric::{Rubric, RubricCriterion, Tier};
use crate::seed::derive_seed;

/// Center of the provisional score distribution, as a fraction of `max_points`
const CENTER_FRACTION: f64 = 0.75;
/// Standard deviation of the provisional score distribution, in points
const SPREAD: f64 = 0.9;
const PENALTY_PROBABILITY: f64 = 0.08;
const BONUS_PROBABILITY: f64 = 0.06;

/// Which generator draws an evaluation consumes
///
/// The legacy tool drew a random comment index for every criterion and then
/// discarded it in favor of the tier comment. That draw shifts every later
/// criterion's outcome, so reproducing historical scores requires keeping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawSequence {
    /// Keep the discarded comment draw (matches historical scores)
    #[default]
    Legacy,
    /// Only the draws that influence the result
    Compact,
}

impl FromStr for DrawSequence {
    type Err = RevisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(DrawSequence::Legacy),
            "compact" => Ok(DrawSequence::Compact),
            other => Err(RevisorError::invalid_value(
                "draw sequence (expected: legacy or compact)",
                other,
            )),
        }
    }
}

impl fmt::Display for DrawSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawSequence::Legacy => write!(f, "legacy"),
            DrawSequence::Compact => write!(f, "compact"),
        }
    }
}

/// Outcome for one criterion of one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub criterion: String,
    pub points_awarded: u32,
    pub max_points: u32,
    pub tier: Tier,
    pub comment: String,
}

/// Outcome for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub document_id: String,
    pub seed: u32,
    /// Per-criterion results in rubric order
    pub criteria_results: Vec<CriterionResult>,
    /// Sum of awarded points, rounded to two decimals
    pub total_score: f64,
}

impl EvaluationResult {
    pub fn criterion(&self, name: &str) -> Option<&CriterionResult> {
        self.criteria_results.iter().find(|r| r.criterion == name)
    }

    /// Sum of the maxima of the evaluated criteria
    pub fn max_score(&self) -> u32 {
        self.criteria_results.iter().map(|r| r.max_points).sum()
    }
}

/// Scoring engine configured with a draw sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    draw_sequence: DrawSequence,
}

impl Scorer {
    pub fn new(draw_sequence: DrawSequence) -> Self {
        Self { draw_sequence }
    }

    pub fn draw_sequence(&self) -> DrawSequence {
        self.draw_sequence
    }

    /// Evaluate one document against a rubric
    pub fn evaluate(&self, identifier: &str, rubric: &Rubric) -> EvaluationResult {
        let start = Instant::now();
        let seed = derive_seed(identifier);
        let mut rng = LegacyRng::from_seed(seed);

        let criteria_results: Vec<CriterionResult> = rubric
            .iter()
            .map(|criterion| self.score_criterion(&mut rng, criterion))
            .collect();

        let awarded: u32 = criteria_results.iter().map(|r| r.points_awarded).sum();
        let total_score = round_to_cents(f64::from(awarded));

        debug!(
            document_id = identifier,
            seed,
            total_score,
            draw_sequence = %self.draw_sequence,
            "evaluate"
        );
        crate::trace_time!(start, "evaluate_document", document_id = identifier);

        EvaluationResult {
            document_id: identifier.to_string(),
            seed,
            criteria_results,
            total_score,
        }
    }

    fn score_criterion(&self, rng: &mut LegacyRng, criterion: &RubricCriterion) -> CriterionResult {
        let max_points = criterion.max_points();
        let max = f64::from(max_points);

        let provisional = rng
            .normal(CENTER_FRACTION * max, SPREAD)
            .round_ties_even()
            .clamp(0.0, max) as u32;

        let step = (max_points / 2).max(1);
        let mut points = provisional;
        if rng.random() < PENALTY_PROBABILITY {
            points = points.saturating_sub(rng.range_inclusive(1, step));
        }
        if rng.random() < BONUS_PROBABILITY {
            points = points
                .saturating_add(rng.range_inclusive(1, step))
                .min(max_points);
        }

        if self.draw_sequence == DrawSequence::Legacy {
            rng.below(criterion.comment_count());
        }

        let tier = Tier::for_score(points, max_points);
        trace!(
            criterion = criterion.name(),
            provisional,
            points,
            max_points,
            ?tier,
            "score_criterion"
        );

        CriterionResult {
            criterion: criterion.name().to_string(),
            points_awarded: points,
            max_points,
            tier,
            comment: criterion.comment(tier).to_string(),
        }
    }
}

/// Evaluate with the default (legacy) draw sequence
pub fn evaluate(identifier: &str, rubric: &Rubric) -> EvaluationResult {
    Scorer::default().evaluate(identifier, rubric)
}

/// Round to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
