//! Batch statistics for the results dashboard

use serde::Serialize;

use crate::scoring::{round_to_cents, EvaluationResult};

/// Minimum total score counted as passing (on the 0-20 scale)
pub const DEFAULT_PASS_THRESHOLD: f64 = 14.0;

/// Number of histogram bins in the score distribution
pub const DEFAULT_HISTOGRAM_BINS: usize = 5;

/// Headline metrics for a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub count: usize,
    pub mean: f64,
    pub passing: usize,
    /// Share of passing documents, in percent
    pub passing_pct: f64,
    pub max: f64,
    pub min: f64,
    pub pass_threshold: f64,
}

impl BatchSummary {
    /// Summarize a batch; `None` when there is nothing to summarize
    pub fn from_batch(batch: &[EvaluationResult], pass_threshold: f64) -> Option<Self> {
        if batch.is_empty() {
            return None;
        }
        let scores: Vec<f64> = batch.iter().map(|r| r.total_score).collect();
        let count = scores.len();
        let sum: f64 = scores.iter().sum();
        let passing = scores.iter().filter(|s| **s >= pass_threshold).count();

        Some(Self {
            count,
            mean: round_to_cents(sum / count as f64),
            passing,
            passing_pct: (passing as f64 / count as f64 * 1000.0).round() / 10.0,
            max: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            min: scores.iter().copied().fold(f64::INFINITY, f64::min),
            pass_threshold,
        })
    }
}

/// A document's position in the score ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<'a> {
    /// 1-based rank, highest score first
    pub rank: usize,
    pub document_id: &'a str,
    pub total_score: f64,
}

/// Results ordered by score, highest first; ties keep submission order
pub fn ranking(batch: &[EvaluationResult]) -> Vec<RankedResult<'_>> {
    let mut ordered: Vec<&EvaluationResult> = batch.iter().collect();
    ordered.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, r)| RankedResult {
            rank: i + 1,
            document_id: &r.document_id,
            total_score: r.total_score,
        })
        .collect()
}

/// One equal-width histogram bin; `upper` is exclusive except for the last bin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over `[min, max]` of the scores
///
/// When every score is identical the range is widened to `value ± 0.5`.
pub fn histogram(scores: &[f64], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 || scores.is_empty() {
        return Vec::new();
    }

    let mut lo = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; bins];
    for &score in scores {
        let mut idx = (((score - lo) / (hi - lo)) * bins as f64).floor() as usize;
        idx = idx.min(bins - 1);
        // Float division can land one bin off an edge
        if score < edges[idx] && idx > 0 {
            idx -= 1;
        } else if idx + 1 < bins && score >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: edges[i],
            upper: edges[i + 1],
            count,
        })
        .collect()
}
