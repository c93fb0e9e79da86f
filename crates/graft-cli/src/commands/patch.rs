//! Patch command implementation.

use anyhow::{Context, Result};
use graft::{PatchReport, SignatureTable, SourceBuffer, load_table, patch};
use std::path::Path;
use tracing::{info, warn};

use super::files::{read_input, write_output};

/// Run the patch command
pub fn run(
    table_path: &Path,
    input: Option<&Path>,
    output: Option<&Path>,
    capacity: usize,
    report: bool,
) -> Result<()> {
    let table = load_table(table_path)
        .with_context(|| format!("Failed to load signature table {:?}", table_path))?;
    info!("Loaded {} table entries", table.len());

    let source = read_input(input)?;
    let (patched, result) = patch_source(&table, source, capacity)?;
    if report {
        eprintln!("{}", format_report(&result)?);
    }

    write_output(output, &patched)
}

/// Patch `source` in memory, logging each entry's outcome
pub fn patch_source(
    table: &SignatureTable,
    source: Vec<u8>,
    capacity: usize,
) -> Result<(Vec<u8>, PatchReport)> {
    let mut buffer = SourceBuffer::from_bytes(source, capacity)?;

    let worst_case = buffer.len().saturating_add(table.max_growth());
    if worst_case > capacity {
        warn!(
            "Source ({} bytes) may exceed capacity {} if all entries match (up to {} bytes)",
            buffer.len(),
            capacity,
            worst_case
        );
    }

    let result = patch(&mut buffer, table)?;
    for entry in &result.entries {
        info!("{}: {}", entry.name, entry.outcome);
    }
    Ok((buffer.into_bytes(), result))
}

pub fn format_report(report: &PatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TABLE: &str = r#"{
        "version": "1",
        "entries": [
            { "name": "login", "signature": "int login(char *user) {", "payload": "return 1;" },
            { "name": "missing", "signature": "never here", "payload": "x" }
        ]
    }"#;

    #[test]
    fn test_run_reads_patches_and_writes_files() {
        let dir = tempdir().unwrap();
        let table_path = dir.path().join("table.json");
        let input_path = dir.path().join("login.c");
        let output_path = dir.path().join("login.patched.c");
        fs::write(&table_path, TABLE).unwrap();
        fs::write(&input_path, "int login(char *user) {\n    return 0;\n}\n").unwrap();

        run(
            &table_path,
            Some(&input_path),
            Some(&output_path),
            1024,
            false,
        )
        .unwrap();

        let patched = fs::read_to_string(&output_path).unwrap();
        assert_eq!(
            patched,
            "int login(char *user) {return 1;\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_run_overflow_writes_nothing() {
        let dir = tempdir().unwrap();
        let table_path = dir.path().join("table.json");
        let input_path = dir.path().join("login.c");
        let output_path = dir.path().join("out.c");
        fs::write(&table_path, TABLE).unwrap();
        fs::write(&input_path, "int login(char *user) {}").unwrap();

        let err = run(&table_path, Some(&input_path), Some(&output_path), 26, false).unwrap_err();
        assert!(
            err.downcast_ref::<graft::Error>()
                .is_some_and(|e| e.is_overflow())
        );
        assert!(!output_path.exists());
    }

    #[test]
    fn test_run_missing_table() {
        let dir = tempdir().unwrap();
        let err = run(&dir.path().join("nope.json"), None, None, 1024, false).unwrap_err();
        assert!(err.to_string().contains("Failed to load signature table"));
    }

    #[test]
    fn test_report_json() {
        let table = SignatureTable::builder()
            .entry("login", "sig", "+")
            .entry("missing", "zzz", "x")
            .build()
            .unwrap();
        let (patched, result) = patch_source(&table, b"sig;".to_vec(), 64).unwrap();
        assert_eq!(patched, b"sig+;");

        let json: serde_json::Value = serde_json::from_str(&format_report(&result).unwrap()).unwrap();
        assert_eq!(json["entries"][0]["name"], "login");
        assert_eq!(json["entries"][0]["outcome"], "applied");
        assert_eq!(json["entries"][0]["at"], 3);
        assert_eq!(json["entries"][0]["inserted"], 1);
        assert_eq!(json["entries"][1]["outcome"], "no_match");
        assert_eq!(json["original_len"], 4);
        assert_eq!(json["final_len"], 5);
    }
}
