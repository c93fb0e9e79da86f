//! # graft
//!
//! Signature-driven source patching.
//!
//! This crate provides:
//! - A capacity-bounded [`SourceBuffer`]
//! - Byte-exact signature search ([`locator`])
//! - Bounds-checked in-place payload insertion ([`splicer`])
//! - Ordered, atomic application of a [`SignatureTable`] ([`patch`])
//! - JSON signature table loading ([`config`])
//! - A C byte-array literal generator for building payloads ([`generator`])
//!
//! Nothing in the core touches the filesystem except the table loader.

pub mod buffer;
pub mod config;
pub mod error;
pub mod generator;
pub mod locator;
pub mod patcher;
pub mod signature;
pub mod splicer;

pub use buffer::{DEFAULT_CAPACITY, SourceBuffer};
pub use config::{
    EntryConfig, PayloadSource, TableConfig, load_table, load_table_config, save_table,
};
pub use error::{Error, Result};
pub use generator::{DEFAULT_ARRAY_NAME, generate, render_array, write_array};
pub use patcher::{EntryOutcome, EntryReport, PatchReport, patch};
pub use signature::{Payload, Signature, SignatureEntry, SignatureTable, SignatureTableBuilder};
