use painel_core::{Effect, Msg};
use painel_engine::{EngineConfig, EngineError, EngineHandle, LoadSource};
use painel_logging::{painel_info, painel_warn};

/// Executes core effects against the engine and reports back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new() -> Result<Self, EngineError> {
        let engine = EngineHandle::new(EngineConfig::default())?;
        Ok(Self { engine })
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut replies = Vec::new();
        for effect in effects {
            match effect {
                Effect::ClearCache => self.engine.clear_cache(),
                Effect::LoadListings => {
                    let outcome = self.engine.load_listings();
                    match outcome.source {
                        LoadSource::Failed => painel_warn!(
                            "Load failed: {}",
                            outcome.warning.as_deref().unwrap_or("unknown")
                        ),
                        source => painel_info!(
                            "Loaded {} job(s) from {:?}",
                            outcome.table.len(),
                            source
                        ),
                    }
                    replies.push(Msg::ListingsLoaded {
                        table: outcome.table,
                        warning: outcome.warning,
                    });
                }
            }
        }
        replies
    }
}
