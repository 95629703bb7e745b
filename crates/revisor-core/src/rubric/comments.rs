//! Built-in comment banks for the default rubric
//!
//! Each bank lists one comment per tier, most favorable first.

use super::CommentBank;

pub(super) fn context_and_relevance() -> CommentBank {
    CommentBank::new([
        "Context well established; relevance is clear and well argued.",
        "Good context, but the contribution to the field could be emphasized more.",
        "Limited context; it is not justified why the problem matters.",
        "Poor or missing context; it is unclear why this is worth investigating.",
    ])
}

pub(super) fn literature_review() -> CommentBank {
    CommentBank::new([
        "Thorough and critical review; relevant, well-integrated references.",
        "Good review, but some key references lack critical depth.",
        "Superficial review; connections to the problem are unclear.",
        "Insufficient review or irrelevant references.",
    ])
}

pub(super) fn problem_identification() -> CommentBank {
    CommentBank::new([
        "Problem clearly identified and well grounded in the literature.",
        "Problem identified, but its scope needs sharper delimitation.",
        "Problem poorly defined or not clearly derived from the literature.",
        "No clear problem is identified.",
    ])
}

pub(super) fn objectives_and_questions() -> CommentBank {
    CommentBank::new([
        "Clear, specific objectives aligned with the problem.",
        "Acceptable objectives, but they could be more measurable or precise.",
        "Vague or overly broad objectives.",
        "Objectives are confusing, missing, or not assessable.",
    ])
}

pub(super) fn justification_and_contribution() -> CommentBank {
    CommentBank::new([
        "Solid justification; theoretical and practical contribution well explained.",
        "Adequate justification, but the impact could be developed further.",
        "Weak justification; contributions are unclear.",
        "Neither the research nor its contribution is justified.",
    ])
}

pub(super) fn structure_and_flow() -> CommentBank {
    CommentBank::new([
        "Logical structure and excellent flow; clear academic writing.",
        "Good structure with some transitions that could improve.",
        "Disorganized structure that hampers comprehension.",
        "Deficient structure; hard to follow.",
    ])
}
