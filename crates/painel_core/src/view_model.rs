use crate::{
    location_counts, requirement_words, title_words, DashboardState, FrequencyTable, JobRecord,
    JobTable,
};

pub const PAGE_TITLE: &str = "💼 Painel de Vagas - Vagas.com";
pub const HEADING_TABLE: &str = "Tabela de Vagas";
pub const HEADING_LOCATIONS: &str = "Cidades com Mais Vagas";
pub const HEADING_TITLE_WORDS: &str = "Palavras Mais Usadas nos Títulos";
pub const HEADING_REQUIREMENT_WORDS: &str = "Requisitos Mais Comuns";
pub const EMPTY_TABLE_WARNING: &str =
    "Nenhuma vaga encontrada. Verifique se a estrutura do site mudou.";

/// Everything the presenter needs for one render pass.
///
/// Frequency tables are only filled for [`DashboardState::Populated`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardViewModel {
    pub dashboard: DashboardState,
    pub warnings: Vec<String>,
    pub rows: Vec<JobRecord>,
    pub location_counts: FrequencyTable,
    pub title_words: FrequencyTable,
    pub requirement_words: FrequencyTable,
    pub dirty: bool,
}

impl DashboardViewModel {
    pub(crate) fn build(
        dashboard: DashboardState,
        table: &JobTable,
        warnings: &[String],
        dirty: bool,
    ) -> Self {
        let mut view = Self {
            dashboard,
            warnings: warnings.to_vec(),
            dirty,
            ..Self::default()
        };
        if dashboard == DashboardState::Populated {
            view.rows = table.rows().to_vec();
            view.location_counts = location_counts(table);
            view.title_words = title_words(table);
            view.requirement_words = requirement_words(table);
        }
        view
    }

    pub fn job_count(&self) -> usize {
        self.rows.len()
    }
}
