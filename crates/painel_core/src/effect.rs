#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run the fetch/extract pipeline (served from cache when warm).
    LoadListings,
    /// Forget the cached table.
    ClearCache,
}
