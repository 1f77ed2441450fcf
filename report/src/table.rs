//! Plain-text rendering of ranked views

use std::io::Write;

use kazam_dex::{RankedView, ViewKind};

/// Render a view as a heading followed by left-aligned columns
pub fn format_view(kind: ViewKind, view: &RankedView<'_>) -> String {
    let header: Vec<String> = view.columns.iter().map(|c| c.header().to_string()).collect();
    let rows: Vec<Vec<String>> = view
        .iter()
        .map(|creature| {
            view.columns
                .iter()
                .map(|c| c.value(creature).to_string())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = format!("{} ({})\n", kind.label(), kind.sheet_name());
    for line in std::iter::once(&header).chain(&rows) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Print every view, separated by blank lines
pub fn print_views<W: Write>(
    out: &mut W,
    views: &[(ViewKind, RankedView<'_>)],
) -> std::io::Result<()> {
    for (kind, view) in views {
        writeln!(out, "{}", format_view(*kind, view))?;
    }
    out.flush()
}
