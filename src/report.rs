//! Headless submission and its printed report.
//!
//! Used by the `submit` command: one form submission against a fresh board,
//! then both lists (or the store snapshot as JSON) written to any `Write`.

use colored::*;
use eyre::{Context, Result};
use log::info;
use std::io::Write;

use crate::board::Board;
use crate::config::FormConfig;
use crate::error::Field;
use crate::view::ListKind;

/// Fill a fresh board's form with the given raw values and submit it once.
///
/// A rejected submission is returned, never printed.
pub fn submit_once(rules: FormConfig, title: &str, description: &str, count: &str) -> crate::Result<Board> {
    info!("Headless submit: {:?}", title);
    let mut board = Board::new(rules);
    let form = board.form_mut();
    form.set_field(Field::Title, title);
    form.set_field(Field::Description, description);
    form.set_field(Field::Count, count);
    board.submit()?;
    Ok(board)
}

/// Write both list views in host order, headings first.
pub fn write_lists<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    for kind in [ListKind::Active, ListKind::Finished] {
        let view = board.view(kind);
        writeln!(out, "{}", view.heading().cyan().bold())?;
        if view.entries().is_empty() {
            writeln!(out, "  {}", "(none)".dimmed())?;
        }
        for entry in view.entries() {
            writeln!(
                out,
                "  {} {} {}",
                "•".green(),
                entry.title(),
                format!("({} people) {}", entry.count(), entry.id()).dimmed()
            )?;
        }
    }
    Ok(())
}

/// Write the store snapshot as pretty JSON.
pub fn write_json<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    let snapshot = board.store().snapshot().into_entries();
    serde_json::to_writer_pretty(&mut *out, &snapshot).context("Failed to serialize snapshot")?;
    writeln!(out)?;
    Ok(())
}
