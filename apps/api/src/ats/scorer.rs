//! ATS scorer — aggregates the category evaluators into a 0–100 report.
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`; the default backend is the
//! heuristic scorer below.

use serde::Serialize;

use crate::ats::categories::{Category, EVALUATORS};
use crate::ats::models::ResumeDocument;
use crate::ats::policy::{Points, ScoringScale, FAIR_BAND_MIN, STRONG_BAND_MIN};

/// Badge shown next to the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= STRONG_BAND_MIN => ScoreBand::Strong,
            s if s >= FAIR_BAND_MIN => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFeedback {
    pub category: Category,
    pub score: Points,
    pub feedback: String,
    /// Empty iff the category passed.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub score: u32, // 0 – 100
    pub band: ScoreBand,
    pub feedback: [CategoryFeedback; 5],
}

impl ScoreReport {
    /// Sum of the category sub-scores before normalization.
    pub fn raw_total(&self) -> Points {
        self.feedback.iter().map(|f| f.score).sum()
    }

    pub fn category(&self, category: Category) -> &CategoryFeedback {
        &self.feedback[category.position()]
    }
}

/// Implement this to swap scoring backends without touching handlers.
pub trait AtsScorer: Send + Sync {
    fn evaluate(&self, doc: &ResumeDocument) -> ScoreReport;

    /// Short label for logs and responses.
    fn backend(&self) -> &'static str;
}

/// Rule-based scorer over contact, skills, experience, education and formatting.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicAtsScorer {
    pub scale: ScoringScale,
}

impl Default for HeuristicAtsScorer {
    fn default() -> Self {
        Self {
            scale: ScoringScale::STANDARD,
        }
    }
}

impl AtsScorer for HeuristicAtsScorer {
    fn evaluate(&self, doc: &ResumeDocument) -> ScoreReport {
        evaluate_with_scale(doc, &self.scale)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Scores a document on the standard 25-point raw scale, normalized to 0–100.
pub fn evaluate(doc: &ResumeDocument) -> ScoreReport {
    evaluate_with_scale(doc, &ScoringScale::STANDARD)
}

pub fn evaluate_with_scale(doc: &ResumeDocument, scale: &ScoringScale) -> ScoreReport {
    let feedback = EVALUATORS.map(|(category, evaluate_category)| {
        let score = evaluate_category(doc, scale).min(scale.category_ceiling);
        build_feedback(category, score, scale)
    });

    let raw: Points = feedback.iter().map(|f| f.score).sum();
    let score = scale.normalize(raw);

    ScoreReport {
        score,
        band: ScoreBand::from_score(score),
        feedback,
    }
}

fn build_feedback(category: Category, score: Points, scale: &ScoringScale) -> CategoryFeedback {
    let copy = category.feedback_copy();
    let passed = scale.passes(score);

    CategoryFeedback {
        category,
        score,
        feedback: (if passed { copy.passing } else { copy.failing }).to_string(),
        suggestions: if passed {
            vec![]
        } else {
            copy.suggestions.iter().map(|s| s.to_string()).collect()
        },
    }
}
