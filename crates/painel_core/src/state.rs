use painel_logging::painel_info;

use crate::view_model::DashboardViewModel;
use crate::JobTable;

/// What the dashboard shows; decided once per loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardState {
    /// Nothing loaded yet.
    #[default]
    Loading,
    /// Loaded table has no rows: show the warning only.
    Empty,
    /// Loaded table has at least one row: show every view.
    Populated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    dashboard: DashboardState,
    table: JobTable,
    warnings: Vec<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dashboard(&self) -> DashboardState {
        self.dashboard
    }

    pub fn table(&self) -> &JobTable {
        &self.table
    }

    pub fn view(&self) -> DashboardViewModel {
        DashboardViewModel::build(self.dashboard, &self.table, &self.warnings, self.dirty)
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn apply_listings(&mut self, table: JobTable, warning: Option<String>) {
        let next = if table.is_empty() {
            DashboardState::Empty
        } else {
            DashboardState::Populated
        };
        painel_info!(
            "Listings applied: {} job(s), {:?} -> {:?}",
            table.len(),
            self.dashboard,
            next
        );
        self.dashboard = next;
        self.table = table;
        self.warnings = warning.into_iter().collect();
        self.dirty = true;
    }
}
