use std::sync::Arc;

use crate::ats::scorer::{AtsScorer, HeuristicAtsScorer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: HeuristicAtsScorer on the standard scale.
    pub scorer: Arc<dyn AtsScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(HeuristicAtsScorer::default()),
        }
    }
}
