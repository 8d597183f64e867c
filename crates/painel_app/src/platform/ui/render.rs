use painel_core::{
    DashboardState, DashboardViewModel, FrequencyTable, COLUMN_HEADERS, EMPTY_TABLE_WARNING,
    HEADING_LOCATIONS, HEADING_REQUIREMENT_WORDS, HEADING_TABLE, HEADING_TITLE_WORDS, PAGE_TITLE,
};

use super::constants::*;
use super::widgets::Widget;

/// Lays out one render pass. `generated_at` is shown as a caption.
pub fn render(view: &DashboardViewModel, generated_at: &str) -> Vec<Widget> {
    let mut widgets = vec![
        Widget::PageTitle(PAGE_TITLE.to_string()),
        Widget::Caption(format!("Atualizado em {generated_at}")),
    ];
    widgets.extend(view.warnings.iter().cloned().map(Widget::Warning));

    match view.dashboard {
        DashboardState::Loading => widgets.push(Widget::Info(LOADING_TEXT.to_string())),
        DashboardState::Empty => widgets.push(Widget::Warning(EMPTY_TABLE_WARNING.to_string())),
        DashboardState::Populated => {
            widgets.push(Widget::Subheader(HEADING_TABLE.to_string()));
            widgets.push(Widget::Table {
                headers: strings(&COLUMN_HEADERS),
                rows: view
                    .rows
                    .iter()
                    .map(|row| row.cells().iter().map(|c| c.to_string()).collect())
                    .collect(),
            });

            widgets.push(Widget::Subheader(HEADING_LOCATIONS.to_string()));
            widgets.push(Widget::BarChart {
                bars: view.location_counts.entries().to_vec(),
                color: BAR_COLOR,
                label_rotation_deg: LABEL_ROTATION_DEG,
            });

            widgets.push(Widget::Subheader(HEADING_TITLE_WORDS.to_string()));
            widgets.push(frequency_table(&WORD_HEADERS, &view.title_words));

            widgets.push(Widget::Subheader(HEADING_REQUIREMENT_WORDS.to_string()));
            widgets.push(frequency_table(&REQUIREMENT_HEADERS, &view.requirement_words));
        }
    }

    widgets
}

fn frequency_table(headers: &[&str], table: &FrequencyTable) -> Widget {
    Widget::Table {
        headers: strings(headers),
        rows: table
            .iter()
            .map(|(key, count)| vec![key.to_string(), count.to_string()])
            .collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
