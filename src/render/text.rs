use itertools::Itertools;

use crate::page::table::Table;
use crate::page::Page;

const COLUMN_GAP: &str = "  ";

pub fn render_table(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }

    let columns = table
        .rows
        .iter()
        .map(|row| row.cells.len())
        .chain(std::iter::once(table.header.len()))
        .max()
        .unwrap_or(0);

    let widths = (0..columns)
        .map(|i| {
            let header_width = table.header.get(i).map_or(0, |h| h.chars().count());
            table
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| cell.text.chars().count())
                .chain(std::iter::once(header_width))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<usize>>();

    let mut lines = vec![format_line(table.header.iter().map(|h| h.as_str()), &widths)];
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .join(COLUMN_GAP),
    );
    for row in table.rows.iter() {
        lines.push(format_line(row.cells.iter().map(|c| c.text.as_str()), &widths));
    }

    lines.join("\n") + "\n"
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter())
        .map(|(text, width)| format!("{:<width$}", text, width = *width))
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

/// Tables plus the input status line, as printed after every request.
pub fn render_tables(page: &Page) -> String {
    let mut text = String::new();

    if !page.card_selection.is_empty() {
        text.push_str("Selection\n");
        text.push_str(&render_table(&page.card_selection));
        text.push('\n');
    }

    text.push_str(&render_table(&page.player_info));
    text
}

pub fn render_prompt(page: &Page) -> String {
    if page.input_enabled {
        "> ".to_string()
    } else {
        format!("[{}] > ", page.send_label)
    }
}

/// Console text appended since `printed` bytes were last shown.
/// A shorter console means it was cleared, so everything is new again.
pub fn console_delta(page: &Page, printed: usize) -> &str {
    let text = page.console.text();
    if printed > text.len() || !text.is_char_boundary(printed) {
        text
    } else {
        &text[printed..]
    }
}
