use painel_logging::painel_debug;

use crate::cache::CacheSettings;
use crate::extract::{ListingExtractor, SelectorError};
use crate::fetch::{default_headers, FetchSettings, ReqwestFetcher, TARGET_URL};
use crate::pipeline::{ListingPipeline, LoadOutcome};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub fetch: FetchSettings,
    pub cache: CacheSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: TARGET_URL.to_string(),
            headers: default_headers(),
            fetch: FetchSettings::default(),
            cache: CacheSettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// Blocking front of the pipeline for the single-threaded app.
///
/// Owns a current-thread runtime; each call blocks until the fetch completes
/// or the transport gives up.
pub struct EngineHandle {
    runtime: tokio::runtime::Runtime,
    pipeline: ListingPipeline,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let pipeline = ListingPipeline::new(
            Box::new(ReqwestFetcher::new(config.fetch)),
            Box::new(ListingExtractor::vagas()?),
            config.url,
            config.headers,
            config.cache,
        );
        painel_debug!("Engine ready for {}", pipeline.url());
        Ok(Self { runtime, pipeline })
    }

    pub fn load_listings(&mut self) -> LoadOutcome {
        self.runtime.block_on(self.pipeline.load())
    }

    pub fn clear_cache(&mut self) {
        self.pipeline.clear_cache();
    }
}
