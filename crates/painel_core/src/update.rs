use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => vec![Effect::LoadListings],
        Msg::CacheClearRequested => vec![Effect::ClearCache, Effect::LoadListings],
        Msg::ListingsLoaded { table, warning } => {
            state.apply_listings(table, warning);
            Vec::new()
        }
    };

    (state, effects)
}
