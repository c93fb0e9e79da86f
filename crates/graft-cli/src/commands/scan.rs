//! Scan command implementation.
//!
//! Lists every insertion point each table entry's signature has in the input.
//! `patch` only ever uses the first one, marked with `*`.

use anyhow::{Context, Result};
use graft::{SignatureTable, load_table, locator};
use std::fmt::Write;
use std::path::Path;

use super::files::read_input;

/// Run the scan command
pub fn run(table_path: &Path, input: Option<&Path>) -> Result<()> {
    let table = load_table(table_path)
        .with_context(|| format!("Failed to load signature table {:?}", table_path))?;
    let source = read_input(input)?;

    print!("{}", format_scan(&table, &source)?);
    Ok(())
}

pub fn format_scan(table: &SignatureTable, source: &[u8]) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Scanning {} bytes with {} entries",
        source.len(),
        table.len()
    )?;
    writeln!(out)?;

    for entry in table {
        let points = locator::find_all(source, &entry.signature);
        if points.is_empty() {
            writeln!(out, "{}: no match", entry.name)?;
            continue;
        }
        writeln!(
            out,
            "{}: {} match(es), +{} bytes",
            entry.name,
            points.len(),
            entry.payload.len()
        )?;
        for (i, at) in points.iter().enumerate() {
            let marker = if i == 0 { "*" } else { " " };
            writeln!(out, "  {} 0x{:X} ({})", marker, at, at)?;
        }
    }

    Ok(out)
}
