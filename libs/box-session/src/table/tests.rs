use super::*;
use crate::history::{handle_generate, History};
use box_kernel::ParameterTriple;
use config::constants::SessionConfig;

fn history_of(triples: &[(i64, i64, i64)]) -> History {
    let mut history = History::new();
    for &(m, n, k) in triples {
        handle_generate(&mut history, ParameterTriple::new(m, n, k), &SessionConfig::default())
            .unwrap();
    }
    history
}

#[test]
fn row_from_entry() {
    let history = history_of(&[(2, 1, 1)]);
    let row = TableRow::from(history.latest().unwrap());
    assert_eq!(
        row.cells(),
        ["2", "1", "1", "4", "2", "4", "6", "No (GCD=2)"].map(String::from)
    );
}

#[test]
fn rows_follow_history_order() {
    let history = history_of(&[(1, 1, 1), (3, 2, 1)]);
    let rows = history.rows();
    assert_eq!(rows[0].m, 3);
    assert_eq!(rows[0].c, 12);
    assert_eq!(rows[1].primitive, "Yes");
}

#[test]
fn empty_table_has_header_only() {
    let text = render_table(&[]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for column in COLUMNS {
        assert!(lines[0].contains(column));
    }
    assert!(lines[1].chars().all(|c| c == '-'));
}

#[test]
fn columns_are_aligned() {
    let history = history_of(&[(1, 1, 1), (300, 200, 100)]);
    let text = render_table(&history.rows());
    let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
    assert!(widths.iter().all(|&w| w == widths[0]), "{text}");
}
