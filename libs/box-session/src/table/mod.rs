//! History table rows.
//!
//! Flattens history entries into the eight columns shown by front ends and
//! renders them as fixed-width text for terminals.

use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// Column titles, in display order.
pub const COLUMNS: [&str; 8] = ["m", "n", "k", "a", "b", "c", "Diagonal (d)", "Primitive?"];

/// One row of the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Parameter m
    pub m: i64,
    /// Parameter n
    pub n: i64,
    /// Parameter k
    pub k: i64,
    /// Edge a
    pub a: i64,
    /// Edge b
    pub b: i64,
    /// Edge c
    pub c: i64,
    /// Space diagonal d
    #[serde(rename = "Diagonal (d)")]
    pub diagonal: i64,
    /// Verdict label
    #[serde(rename = "Primitive?")]
    pub primitive: String,
}

impl TableRow {
    /// Cell texts in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.m.to_string(),
            self.n.to_string(),
            self.k.to_string(),
            self.a.to_string(),
            self.b.to_string(),
            self.c.to_string(),
            self.diagonal.to_string(),
            self.primitive.clone(),
        ]
    }
}

impl From<&HistoryEntry> for TableRow {
    fn from(entry: &HistoryEntry) -> Self {
        let p = entry.parameters;
        let d = entry.dimensions;
        Self {
            m: p.m,
            n: p.n,
            k: p.k,
            a: d.a,
            b: d.b,
            c: d.c,
            diagonal: d.d,
            primitive: entry.label.clone(),
        }
    }
}

/// Renders rows as a right-aligned, fixed-width text table with a header.
///
/// Returns only the header and rule when `rows` is empty.
///
/// # Examples
/// ```
/// use box_session::{render_table, Session, ParameterTriple};
///
/// let mut session = Session::default();
/// session.submit(ParameterTriple::new(2, 1, 1)).unwrap();
///
/// let text = render_table(&session.history().rows());
/// let lines: Vec<&str> = text.lines().collect();
/// assert_eq!(lines.len(), 3);
/// assert!(lines[0].contains("Diagonal (d)"));
/// assert!(lines[2].ends_with("No (GCD=2)"));
/// ```
pub fn render_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; 8]> = rows.iter().map(TableRow::cells).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_line(COLUMNS.iter().copied(), &widths);
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    for row in &cells {
        out.push('\n');
        out.push_str(&format_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn format_line<'a>(texts: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    texts
        .zip(widths.iter())
        .map(|(text, &width)| format!("{text:>width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests;
