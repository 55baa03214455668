//! Subcommand implementations.
//!
//! Every command writes to a caller-supplied writer so it can be exercised
//! without a terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use box_kernel::{build_box_geometry, check_primitivity, BoxGeometry};
use box_session::{render_table, verdict_label, HistoryEntry, ParameterTriple, Scene, Session};
use tracing::debug;

/// Text printed for unrecognized interactive input.
pub const INTERACTIVE_HELP: &str =
    "Enter three integers 'm n k', or one of: history, clear, quit";

/// `pbox generate`: validates, computes and reports one box.
///
/// # Errors
/// The rejection message for invalid parameters, or an I/O or export error.
pub fn generate(out: &mut impl Write, parameters: ParameterTriple, json: bool) -> Result<()> {
    let mut session = Session::default();
    let entry = session.submit(parameters)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?;
    } else {
        write_entry(out, entry)?;
    }
    Ok(())
}

/// `pbox check`: primitivity of three edge lengths.
///
/// # Errors
/// I/O errors only.
pub fn check(out: &mut impl Write, a: i64, b: i64, c: i64) -> Result<()> {
    let verdict = check_primitivity(a, b, c);
    writeln!(out, "gcd({a}, {b}, {c}) = {}", verdict.gcd)?;
    writeln!(out, "Primitive? {}", verdict_label(&verdict))?;
    Ok(())
}

/// `pbox geometry`: corners and edges of an `a × b × c` box.
///
/// # Errors
/// I/O or serialization errors.
pub fn geometry(out: &mut impl Write, a: f64, b: f64, c: f64, json: bool) -> Result<()> {
    let geometry = build_box_geometry(a, b, c);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&geometry)?)?;
    } else {
        write_geometry(out, &geometry)?;
    }
    Ok(())
}

/// `pbox interactive`: reads `m n k` lines until EOF or `quit`.
///
/// Rejected or malformed lines are reported and the loop continues.
///
/// # Errors
/// I/O errors on `input` or `out`.
pub fn interactive(input: impl BufRead, out: &mut impl Write, session: &mut Session) -> Result<()> {
    writeln!(out, "{INTERACTIVE_HELP}")?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        debug!(line, "interactive input");

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "history" => write_history(out, session)?,
            "clear" => {
                session.clear();
                writeln!(out, "History cleared.")?;
            }
            _ => match parse_parameters(line) {
                Some(parameters) => submit_line(out, session, parameters)?,
                None => writeln!(out, "{INTERACTIVE_HELP}")?,
            },
        }
    }
    Ok(())
}

fn submit_line(out: &mut impl Write, session: &mut Session, parameters: ParameterTriple) -> Result<()> {
    let accepted = match session.submit(parameters) {
        Ok(entry) => {
            write_entry(out, entry)?;
            true
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            false
        }
    };

    if accepted {
        writeln!(out)?;
        write_history(out, session)?;
    }
    Ok(())
}

/// Parses `"m n k"`; commas are accepted as separators.
pub fn parse_parameters(line: &str) -> Option<ParameterTriple> {
    let mut values = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<i64>);

    let (Some(Ok(m)), Some(Ok(n)), Some(Ok(k)), None) =
        (values.next(), values.next(), values.next(), values.next())
    else {
        return None;
    };
    Some(ParameterTriple::new(m, n, k))
}

fn write_entry(out: &mut impl Write, entry: &HistoryEntry) -> Result<()> {
    let scene = Scene::from_entry(entry);
    writeln!(out, "Parameters: {}", entry.parameters)?;
    writeln!(out, "Box: {}", entry.dimensions)?;
    writeln!(out, "Primitive? {}", entry.label)?;
    writeln!(
        out,
        "Scene: {} (axes {} to {})",
        scene.title, scene.axis_range.0, scene.axis_range.1
    )?;
    Ok(())
}

fn write_history(out: &mut impl Write, session: &Session) -> Result<()> {
    if session.history().is_empty() {
        writeln!(out, "History is empty.")?;
    } else {
        writeln!(out, "{}", render_table(&session.history().rows()))?;
    }
    Ok(())
}

fn write_geometry(out: &mut impl Write, geometry: &BoxGeometry) -> Result<()> {
    writeln!(out, "Vertices:")?;
    for (i, v) in geometry.vertices.iter().enumerate() {
        writeln!(out, "  {i}: ({}, {}, {})", v.x, v.y, v.z)?;
    }
    writeln!(out, "Edges:")?;
    for (i, j) in geometry.edges {
        writeln!(out, "  {i} - {j}")?;
    }
    let diagonal = geometry.diagonal();
    writeln!(out, "Diagonal length: {}", diagonal.length())?;
    Ok(())
}

#[cfg(test)]
mod tests;
