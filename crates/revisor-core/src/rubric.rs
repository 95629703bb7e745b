//! Rubric definition
//!
//! A rubric is an ordered list of named criteria, each with a maximum point
//! value and a four-tier comment bank. Order matters: the scoring engine
//! consumes generator draws criterion by criterion in rubric order.

mod comments;

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, RevisorError};

/// Comment used for criteria that have no comment bank
pub const GENERIC_COMMENT: &str = "Generic comment.";

/// Qualitative comment band, most favorable first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Lower bounds as a percentage of `max_points`, evaluated top-down.
/// Anything below the last bound is [`Tier::Poor`]. Compared in integers so
/// that a score exactly on a bound always lands in the higher tier.
pub const TIER_THRESHOLDS: [(u32, Tier); 3] = [
    (90, Tier::Excellent),
    (60, Tier::Good),
    (30, Tier::Fair),
];

impl Tier {
    /// Tier implied by a final score
    ///
    /// A criterion worth zero points has no meaningful fraction and is
    /// always [`Tier::Poor`].
    pub fn for_score(points: u32, max_points: u32) -> Tier {
        if max_points == 0 {
            return Tier::Poor;
        }
        let scaled = u64::from(points) * 100;
        TIER_THRESHOLDS
            .iter()
            .find(|(percent, _)| scaled >= u64::from(*percent) * u64::from(max_points))
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Poor)
    }

    /// Position in a comment bank
    pub fn index(self) -> usize {
        match self {
            Tier::Excellent => 0,
            Tier::Good => 1,
            Tier::Fair => 2,
            Tier::Poor => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Excellent => f.pad("excellent"),
            Tier::Good => f.pad("good"),
            Tier::Fair => f.pad("fair"),
            Tier::Poor => f.pad("poor"),
        }
    }
}

/// One comment per tier, most favorable first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentBank([String; 4]);

impl CommentBank {
    pub fn new(comments: [&str; 4]) -> Self {
        CommentBank(comments.map(str::to_string))
    }

    pub fn comment(&self, tier: Tier) -> &str {
        &self.0[tier.index()]
    }
}

/// A single scoring criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricCriterion {
    name: String,
    max_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<CommentBank>,
}

impl RubricCriterion {
    /// Criterion with its own comment bank
    pub fn new(name: impl Into<String>, max_points: u32, comments: CommentBank) -> Self {
        Self {
            name: name.into(),
            max_points,
            comments: Some(comments),
        }
    }

    /// Criterion that falls back to [`GENERIC_COMMENT`]
    pub fn without_comments(name: impl Into<String>, max_points: u32) -> Self {
        Self {
            name: name.into(),
            max_points,
            comments: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    /// Number of candidate comments (4 with a bank, 1 for the generic fallback)
    pub fn comment_count(&self) -> u32 {
        if self.comments.is_some() {
            4
        } else {
            1
        }
    }

    /// Comment for a tier; criteria without a bank ignore the tier
    pub fn comment(&self, tier: Tier) -> &str {
        match &self.comments {
            Some(bank) => bank.comment(tier),
            None => GENERIC_COMMENT,
        }
    }
}

/// Ordered set of uniquely named criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rubric {
    criteria: Vec<RubricCriterion>,
}

impl Rubric {
    /// Build a rubric, rejecting empty or duplicate criterion names
    pub fn new(criteria: Vec<RubricCriterion>) -> Result<Self> {
        let mut seen = HashSet::new();
        for criterion in &criteria {
            if criterion.name.trim().is_empty() {
                return Err(RevisorError::invalid_rubric("criterion name is empty"));
            }
            if !seen.insert(criterion.name.as_str()) {
                return Err(RevisorError::invalid_rubric(format!(
                    "duplicate criterion name: {}",
                    criterion.name
                )));
            }
        }
        Ok(Self { criteria })
    }

    pub fn criteria(&self) -> &[RubricCriterion] {
        &self.criteria
    }

    pub fn iter(&self) -> impl Iterator<Item = &RubricCriterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RubricCriterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    /// Sum of all criterion maxima (20 for the default rubric)
    pub fn total_points(&self) -> u32 {
        self.criteria.iter().map(|c| c.max_points).sum()
    }
}

impl Default for Rubric {
    /// The built-in six-criterion rubric, worth 20 points in total
    fn default() -> Self {
        Self {
            criteria: vec![
                RubricCriterion::new("Context and relevance", 4, comments::context_and_relevance()),
                RubricCriterion::new("Literature review", 4, comments::literature_review()),
                RubricCriterion::new(
                    "Problem identification",
                    4,
                    comments::problem_identification(),
                ),
                RubricCriterion::new(
                    "Objectives and questions",
                    4,
                    comments::objectives_and_questions(),
                ),
                RubricCriterion::new(
                    "Justification and contribution",
                    2,
                    comments::justification_and_contribution(),
                ),
                RubricCriterion::new("Structure and flow", 2, comments::structure_and_flow()),
            ],
        }
    }
}
