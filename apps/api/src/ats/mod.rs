// ATS scoring engine: a pure function from a resume document to a 0–100
// score with per-category feedback. Handlers host it over HTTP.

pub mod categories;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod scorer;
pub mod text;

pub use models::ResumeDocument;
pub use scorer::{evaluate, AtsScorer, CategoryFeedback, HeuristicAtsScorer, ScoreBand, ScoreReport};
