//! Plain-text rendering of the dashboard for stdout.

use super::widgets::Widget;

const MAX_CELL_CHARS: usize = 48;
const BAR_MAX_WIDTH: usize = 40;
const BAR_GLYPH: char = '█';

pub fn draw(widgets: &[Widget]) -> String {
    let mut out = String::new();
    for widget in widgets {
        match widget {
            Widget::PageTitle(text) => {
                out.push_str(text);
                out.push('\n');
                out.push_str(&"=".repeat(char_len(text)));
                out.push('\n');
            }
            Widget::Caption(text) => push_line(&mut out, text),
            Widget::Info(text) => push_line(&mut out, &format!("ℹ {text}")),
            Widget::Warning(text) => push_line(&mut out, &format!("⚠ {text}")),
            Widget::Subheader(text) => {
                out.push('\n');
                push_line(&mut out, text);
                push_line(&mut out, &"-".repeat(char_len(text)));
            }
            Widget::Table { headers, rows } => draw_table(&mut out, headers, rows),
            Widget::BarChart { bars, .. } => draw_bars(&mut out, bars),
        }
    }
    out
}

fn draw_table(out: &mut String, headers: &[String], rows: &[Vec<String>]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| clip(cell)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| char_len(h)).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(char_len(cell));
        }
    }

    push_line(out, &format_row(headers, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(out, &rule.join("-+-"));
    for row in &cells {
        push_line(out, &format_row(row, &widths));
    }
}

fn draw_bars(out: &mut String, bars: &[(String, usize)]) {
    let max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    let label_width = bars.iter().map(|(label, _)| char_len(&clip(label))).max().unwrap_or(0);
    for (label, count) in bars {
        let len = (count * BAR_MAX_WIDTH).div_ceil(max);
        let bar: String = std::iter::repeat(BAR_GLYPH).take(len).collect();
        push_line(
            out,
            &format!("{} │{} {}", pad(&clip(label), label_width), bar, count),
        );
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(char_len(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Shortens long cells so one requirement snippet cannot blow up the layout.
fn clip(text: &str) -> String {
    if char_len(text) <= MAX_CELL_CHARS {
        return text.to_string();
    }
    let kept: String = text.chars().take(MAX_CELL_CHARS - 1).collect();
    format!("{kept}…")
}
