use std::time::{Duration, Instant};

use painel_core::JobTable;
use painel_logging::painel_debug;

/// Identifies one memoized load: the request inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(url: impl Into<String>, headers: &[(String, String)]) -> Self {
        Self {
            url: url.into(),
            headers: headers.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Entries older than this are treated as missing. `None` keeps them
    /// until [`ListingCache::clear`].
    pub ttl: Option<Duration>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl: Some(Duration::from_secs(60 * 60)),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    key: CacheKey,
    table: JobTable,
    stored_at: Instant,
}

/// Process-scoped memo of the last extracted table.
///
/// Holds a single entry: the inputs never vary within one run, so a second
/// key only appears in tests.
#[derive(Debug, Clone, Default)]
pub struct ListingCache {
    settings: CacheSettings,
    entry: Option<CacheEntry>,
}

impl ListingCache {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            settings,
            entry: None,
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<&JobTable> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&self, key: &CacheKey, now: Instant) -> Option<&JobTable> {
        let entry = self.entry.as_ref().filter(|entry| &entry.key == key)?;
        if let Some(ttl) = self.settings.ttl {
            if now.saturating_duration_since(entry.stored_at) >= ttl {
                painel_debug!("Cached listings for {} expired", key.url);
                return None;
            }
        }
        Some(&entry.table)
    }

    pub fn store(&mut self, key: CacheKey, table: JobTable) {
        self.entry = Some(CacheEntry {
            key,
            table,
            stored_at: Instant::now(),
        });
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
