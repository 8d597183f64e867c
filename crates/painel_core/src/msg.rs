use crate::JobTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked to redraw the dashboard; a warm cache is reused.
    RefreshRequested,
    /// User asked to drop the cached listings and fetch again.
    CacheClearRequested,
    /// Pipeline finished. `warning` is set when the fetch failed.
    ListingsLoaded {
        table: JobTable,
        warning: Option<String>,
    },
}
