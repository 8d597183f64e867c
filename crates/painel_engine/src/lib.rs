//! Painel engine: fetching, decoding and extracting the job listing page.
mod cache;
mod decode;
mod engine;
mod extract;
mod fetch;
mod persist;
mod pipeline;
mod types;

pub use cache::{CacheKey, CacheSettings, ListingCache};
pub use decode::{decode_page, DecodedPage};
pub use engine::{EngineConfig, EngineError, EngineHandle};
pub use extract::{
    find_all, first_or_default, text_of, Extractor, JobSelectors, ListingExtractor,
    SelectorError, SelectorSpec, VAGAS_MARKUP,
};
pub use fetch::{default_headers, FetchSettings, Fetcher, ReqwestFetcher, TARGET_URL, USER_AGENT};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{ListingPipeline, LoadOutcome, LoadSource};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
