//! JSON signature table configuration
//!
//! A table file lists named entries in application order. Each payload is
//! either an inline string or a file whose raw bytes are used verbatim; file
//! paths are resolved relative to the table file's directory.
//!
//! ```json
//! {
//!   "version": "1",
//!   "entries": [
//!     { "name": "login", "signature": "int login(char *user) {", "payload": "return 1;" },
//!     { "name": "compile", "signature": "compile(", "payload": { "file": "attack.bin" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;
use crate::signature::{Payload, Signature, SignatureEntry, SignatureTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadSource {
    Inline(String),
    File { file: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub name: String,
    pub signature: String,
    pub payload: PayloadSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub version: String,
    pub entries: Vec<EntryConfig>,
}

impl TableConfig {
    pub fn entry(&self, name: &str) -> Option<&EntryConfig> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Resolve payload files against `base_dir` and build the table
    pub fn resolve(&self, base_dir: &Path) -> Result<SignatureTable> {
        let mut entries = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let signature = Signature::new(entry.signature.as_bytes()).inspect_err(|_| {
                warn!("Entry '{}' has an empty signature", entry.name);
            })?;
            let payload = match &entry.payload {
                PayloadSource::Inline(text) => Payload::new(text.as_bytes()),
                PayloadSource::File { file } => {
                    let path = base_dir.join(file);
                    debug!("Reading payload for '{}' from {:?}", entry.name, path);
                    Payload::new(fs::read(&path)?)
                }
            };
            entries.push(SignatureEntry::new(entry.name.clone(), signature, payload));
        }
        SignatureTable::new(entries)
    }
}

pub fn load_table_config<P: AsRef<Path>>(path: P) -> Result<TableConfig> {
    let content = fs::read_to_string(&path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load a table file and resolve it into a [`SignatureTable`]
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<SignatureTable> {
    let path = path.as_ref();
    let config = load_table_config(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let table = config.resolve(base_dir)?;
    debug!(
        "Loaded signature table {:?} (version '{}', {} entries)",
        path,
        config.version,
        table.len()
    );
    Ok(table)
}

pub fn save_table<P: AsRef<Path>>(path: P, config: &TableConfig) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_load_inline_and_file_payloads() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("attack.bin"), [0u8, 1, 2]).unwrap();
        let table_path = dir.path().join("table.json");
        fs::write(
            &table_path,
            r#"{
                "version": "1",
                "entries": [
                    { "name": "login", "signature": "login(", "payload": "x" },
                    { "name": "compile", "signature": "compile(", "payload": { "file": "attack.bin" } }
                ]
            }"#,
        )
        .unwrap();

        let table = load_table(&table_path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].name, "login");
        assert_eq!(table.entries()[0].payload.as_bytes(), b"x");
        assert_eq!(table.entries()[1].signature.as_bytes(), b"compile(");
        assert_eq!(table.entries()[1].payload.as_bytes(), &[0, 1, 2]);
    }

    #[test]
    fn test_empty_signature_rejected() {
        let dir = tempdir().unwrap();
        let table_path = dir.path().join("table.json");
        fs::write(
            &table_path,
            r#"{ "entries": [ { "name": "bad", "signature": "", "payload": "x" } ] }"#,
        )
        .unwrap();

        let err = load_table(&table_path).unwrap_err();
        assert!(matches!(err, Error::InvalidSignature));
    }

    #[test]
    fn test_resolve_empty_signature_in_memory() {
        let config = TableConfig {
            version: String::new(),
            entries: vec![EntryConfig {
                name: "bad".to_string(),
                signature: String::new(),
                payload: PayloadSource::Inline("x".to_string()),
            }],
        };
        let err = config.resolve(Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::InvalidSignature));
    }

    #[test]
    fn test_missing_payload_file() {
        let dir = tempdir().unwrap();
        let table_path = dir.path().join("table.json");
        fs::write(
            &table_path,
            r#"{ "entries": [ { "name": "a", "signature": "a", "payload": { "file": "nope.bin" } } ] }"#,
        )
        .unwrap();

        assert!(matches!(load_table(&table_path), Err(Error::Io(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.json");
        let config = TableConfig {
            version: "2".to_string(),
            entries: vec![EntryConfig {
                name: "login".to_string(),
                signature: "int login(".to_string(),
                payload: PayloadSource::Inline("return 1;".to_string()),
            }],
        };

        save_table(&path, &config).unwrap();
        let loaded = load_table_config(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.entry("LOGIN").is_some());
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_table(&path), Err(Error::Json(_))));
    }
}
