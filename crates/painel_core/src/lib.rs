//! Painel core: job table model, aggregation and the pure dashboard state machine.
mod effect;
mod frequency;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use frequency::{
    count_top, location_counts, requirement_words, title_words, FrequencyTable, TOP_N,
};
pub use msg::Msg;
pub use record::{tabulate, JobRecord, JobTable, COLUMN_HEADERS, NOT_INFORMED};
pub use state::{AppState, DashboardState};
pub use update::update;
pub use view_model::{
    DashboardViewModel, EMPTY_TABLE_WARNING, HEADING_LOCATIONS, HEADING_REQUIREMENT_WORDS,
    HEADING_TABLE, HEADING_TITLE_WORDS, PAGE_TITLE,
};
