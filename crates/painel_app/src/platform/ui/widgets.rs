/// One visual element of the dashboard, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    PageTitle(String),
    Caption(String),
    Info(String),
    Warning(String),
    Subheader(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    BarChart {
        bars: Vec<(String, usize)>,
        color: &'static str,
        label_rotation_deg: i32,
    },
}
