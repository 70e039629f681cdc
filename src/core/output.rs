//! Plain-text table rendering for CLI listings.

use colored::{ColoredString, Colorize};

/// Collapse whitespace and bound a cell to `max_chars`, marking truncation with `...`.
pub fn fit_cell(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(3);
    let preview: String = collapsed.chars().take(keep).collect();
    format!("{}...", preview)
}

/// A table cell: display text plus an optional color applied after padding.
pub struct Cell {
    pub text: String,
    pub paint: Option<fn(&str) -> ColoredString>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            paint: None,
        }
    }

    pub fn painted(text: impl Into<String>, paint: fn(&str) -> ColoredString) -> Self {
        Self {
            text: text.into(),
            paint: Some(paint),
        }
    }
}

/// Left-aligned columns separated by two spaces, with a bold header row.
pub fn render_table(headers: &[&str], rows: &[Vec<Cell>], max_cell: usize) -> String {
    let fitted: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|c| fit_cell(&c.text, max_cell)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &fitted {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&format!("{}\n", header_line.trim_end().bold()));

    for (row, texts) in rows.iter().zip(&fitted) {
        let line = row
            .iter()
            .zip(texts)
            .zip(&widths)
            .map(|((cell, text), w)| {
                let padded = format!("{:<width$}", text, width = *w);
                match cell.paint {
                    Some(paint) => paint(&padded).to_string(),
                    None => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
