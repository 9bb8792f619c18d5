use std::sync::Arc;

use crate::cache::AnalysisCache;
use crate::config::Config;
use crate::extraction::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractor. Default: GeminiExtractor.
    pub extractor: Arc<dyn ResumeExtractor>,
    /// Present only when REDIS_URL is configured.
    pub cache: Option<AnalysisCache>,
}
