//! Self-contained HTML page with an inline SVG bar chart.
//!
//! Markup lives in `templates/dashboard.html`; askama escapes every value.

use askama::Template;

use super::constants::DOCUMENT_TITLE;
use super::widgets::Widget;

const CHART_HEIGHT: usize = 240;
const BAR_WIDTH: usize = 36;
const BAR_GAP: usize = 14;
const LABEL_SPACE: usize = 120;
const MARGIN: usize = 40;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    document_title: &'a str,
    blocks: Vec<Block<'a>>,
}

enum Block<'a> {
    Title(&'a str),
    Caption(&'a str),
    Info(&'a str),
    Warning(&'a str),
    Subheader(&'a str),
    Table(TableBlock<'a>),
    Chart(SvgChart<'a>),
}

struct TableBlock<'a> {
    headers: &'a [String],
    rows: &'a [Vec<String>],
}

/// Vertical bars, tallest scaled to `CHART_HEIGHT`, labels rotated under the axis.
struct SvgChart<'a> {
    width: usize,
    height: usize,
    axis_start: usize,
    axis_end: usize,
    axis_y: usize,
    label_y: usize,
    bar_width: usize,
    color: &'a str,
    rotation_deg: i32,
    bars: Vec<SvgBar<'a>>,
}

struct SvgBar<'a> {
    label: &'a str,
    count: usize,
    x: usize,
    y: usize,
    height: usize,
    center: usize,
    count_y: usize,
}

pub fn draw(widgets: &[Widget]) -> Result<String, askama::Error> {
    let page = DashboardPage {
        document_title: DOCUMENT_TITLE,
        blocks: widgets.iter().map(block_for).collect(),
    };
    page.render()
}

fn block_for(widget: &Widget) -> Block<'_> {
    match widget {
        Widget::PageTitle(text) => Block::Title(text),
        Widget::Caption(text) => Block::Caption(text),
        Widget::Info(text) => Block::Info(text),
        Widget::Warning(text) => Block::Warning(text),
        Widget::Subheader(text) => Block::Subheader(text),
        Widget::Table { headers, rows } => Block::Table(TableBlock { headers, rows }),
        Widget::BarChart {
            bars,
            color,
            label_rotation_deg,
        } => Block::Chart(layout_chart(bars, color, *label_rotation_deg)),
    }
}

fn layout_chart<'a>(bars: &'a [(String, usize)], color: &'a str, rotation_deg: i32) -> SvgChart<'a> {
    let max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    let width = MARGIN * 2 + bars.len() * (BAR_WIDTH + BAR_GAP);
    let axis_y = MARGIN + CHART_HEIGHT;

    let bars = bars
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let x = MARGIN + BAR_GAP / 2 + i * (BAR_WIDTH + BAR_GAP);
            let height = count * CHART_HEIGHT / max;
            let y = axis_y - height;
            SvgBar {
                label,
                count: *count,
                x,
                y,
                height,
                center: x + BAR_WIDTH / 2,
                count_y: y.saturating_sub(4),
            }
        })
        .collect();

    SvgChart {
        width,
        height: CHART_HEIGHT + LABEL_SPACE + MARGIN,
        axis_start: MARGIN,
        axis_end: width - MARGIN,
        axis_y,
        label_y: axis_y + 14,
        bar_width: BAR_WIDTH,
        color,
        rotation_deg,
        bars,
    }
}
