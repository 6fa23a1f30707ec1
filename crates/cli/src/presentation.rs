// crates/cli/src/presentation.rs
use colored::{Color, Colorize};
use linetally_engine::tally::Summary;
use std::io::Write;

pub const FILE_TYPE_COL_WIDTH: usize = 26;
pub const LINES_COL_WIDTH: usize = 26;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStyle {
    pub color: bool,
}

/// Write the report table to stdout.
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn print_results(summary: &Summary, style: TableStyle) -> std::io::Result<()> {
    let table = render_table(summary, style);
    let mut out = std::io::stdout().lock();
    out.write_all(table.as_bytes())?;
    out.flush()
}

/// Render the bordered two-column table.
///
/// Cells are padded before colouring so escape codes never shift the borders.
/// The `other` bucket is not part of `summary.rows` and is never shown.
pub fn render_table(summary: &Summary, style: TableStyle) -> String {
    let border = border();
    let mut out = String::new();

    out.push_str(&border);
    out.push_str(&row(
        paint(pad("File Type", FILE_TYPE_COL_WIDTH), Color::Yellow, style),
        paint(pad("Lines of Code", LINES_COL_WIDTH), Color::Yellow, style),
    ));
    out.push_str(&border);

    for (label, lines) in &summary.rows {
        out.push_str(&row(
            paint(pad(label, FILE_TYPE_COL_WIDTH), Color::Green, style),
            paint(pad(lines, LINES_COL_WIDTH), Color::Cyan, style),
        ));
    }

    out.push_str(&border);
    out.push_str(&row(
        paint(pad("Total", FILE_TYPE_COL_WIDTH), Color::Magenta, style),
        paint(pad(summary.total, LINES_COL_WIDTH), Color::Magenta, style),
    ));
    out.push_str(&border);
    out
}

fn border() -> String {
    format!(
        "+-{}-+-{}-+\n",
        "-".repeat(FILE_TYPE_COL_WIDTH),
        "-".repeat(LINES_COL_WIDTH)
    )
}

fn row(left: String, right: String) -> String {
    format!("| {left} | {right} |\n")
}

fn pad(value: impl std::fmt::Display, width: usize) -> String {
    format!("{value:<width$}")
}

fn paint(cell: String, color: Color, style: TableStyle) -> String {
    if style.color {
        cell.color(color).to_string()
    } else {
        cell
    }
}
