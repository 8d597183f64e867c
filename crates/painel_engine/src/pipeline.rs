use painel_core::JobTable;
use painel_logging::{painel_info, painel_warn};

use crate::cache::{CacheKey, CacheSettings, ListingCache};
use crate::decode::decode_page;
use crate::{Extractor, Fetcher};

/// Where a loaded table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Cache,
    Network,
    /// The fetch failed; the table is empty and a warning is set.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub table: JobTable,
    pub warning: Option<String>,
    pub source: LoadSource,
}

/// Fetch → decode → extract, memoized on the request inputs.
pub struct ListingPipeline {
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
    cache: ListingCache,
    url: String,
    headers: Vec<(String, String)>,
}

impl ListingPipeline {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        extractor: Box<dyn Extractor>,
        url: impl Into<String>,
        headers: Vec<(String, String)>,
        cache: CacheSettings,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            cache: ListingCache::new(cache),
            url: url.into(),
            headers,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the job table. A failed fetch is not an error here: it yields
    /// an empty table plus the warning to show.
    pub async fn load(&mut self) -> LoadOutcome {
        let key = CacheKey::new(self.url.clone(), &self.headers);
        if let Some(table) = self.cache.get(&key) {
            painel_info!("Serving {} job(s) from cache", table.len());
            return LoadOutcome {
                table: table.clone(),
                warning: None,
                source: LoadSource::Cache,
            };
        }

        let output = match self.fetcher.fetch(&self.url, &self.headers).await {
            Ok(output) => output,
            Err(err) => {
                painel_warn!("Fetch of {} failed: {}", self.url, err);
                return LoadOutcome {
                    table: JobTable::new(),
                    warning: Some(err.user_warning()),
                    source: LoadSource::Failed,
                };
            }
        };

        let page = decode_page(
            &output.bytes,
            output.metadata.content_type.as_deref(),
            Some(&output.metadata.final_url),
        );
        painel_info!(
            "Fetched {} byte(s) from {} as {}",
            output.metadata.byte_len,
            output.metadata.final_url,
            page.encoding_label
        );

        let table = self.extractor.extract(&page.html);
        self.cache.store(key, table.clone());
        LoadOutcome {
            table,
            warning: None,
            source: LoadSource::Network,
        }
    }

    pub fn clear_cache(&mut self) {
        painel_info!("Listing cache cleared");
        self.cache.clear();
    }
}
