use std::sync::Once;

use painel_core::{
    tabulate, update, AppState, DashboardState, Effect, JobRecord, JobTable, Msg,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(painel_logging::initialize_for_tests);
}

fn one_job() -> JobTable {
    tabulate(vec![JobRecord {
        title: "Dev Backend".into(),
        company: "Acme Corp".into(),
        location: "São Paulo".into(),
        requirement: "Python, SQL".into(),
    }])
}

#[test]
fn new_state_is_loading_and_clean() {
    let mut state = AppState::new();
    assert_eq!(state.dashboard(), DashboardState::Loading);
    assert!(!state.consume_dirty());
}

#[test]
fn refresh_requests_a_load() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::LoadListings]);
}

#[test]
fn cache_clear_drops_cache_before_loading() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::CacheClearRequested);
    assert_eq!(effects, vec![Effect::ClearCache, Effect::LoadListings]);
}

#[test]
fn loaded_rows_make_dashboard_populated() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::ListingsLoaded {
            table: one_job(),
            warning: None,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.dashboard(), DashboardState::Populated);
    let view = state.view();
    assert!(view.dirty);
    assert_eq!(view.job_count(), 1);
    assert_eq!(view.location_counts.max_count(), 1);
    assert_eq!(view.title_words.len(), 2);
    assert!(view.warnings.is_empty());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn failed_fetch_gives_empty_dashboard_with_warning() {
    init_logging();
    let (state, _effects) = update(
        AppState::new(),
        Msg::ListingsLoaded {
            table: JobTable::new(),
            warning: Some("Erro na requisição: 404".into()),
        },
    );

    let view = state.view();
    assert_eq!(view.dashboard, DashboardState::Empty);
    assert_eq!(view.warnings, vec!["Erro na requisição: 404".to_string()]);
    assert!(view.rows.is_empty());
    assert!(view.location_counts.is_empty());
    assert!(view.title_words.is_empty());
    assert!(view.requirement_words.is_empty());
}

#[test]
fn later_load_replaces_table_and_warnings() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::ListingsLoaded {
            table: JobTable::new(),
            warning: Some("Erro na requisição: 503".into()),
        },
    );
    let (state, _) = update(
        state,
        Msg::ListingsLoaded {
            table: one_job(),
            warning: None,
        },
    );

    assert_eq!(state.dashboard(), DashboardState::Populated);
    assert_eq!(state.table(), &one_job());
    assert!(state.view().warnings.is_empty());
}

#[test]
fn reloading_the_same_table_leaves_no_trace() {
    init_logging();
    let load = || Msg::ListingsLoaded {
        table: one_job(),
        warning: None,
    };
    let (mut once, _) = update(AppState::new(), load());
    let (mut twice, _) = update(once.clone(), load());

    assert!(once.consume_dirty());
    assert!(twice.consume_dirty());
    assert_eq!(once, twice);
}
