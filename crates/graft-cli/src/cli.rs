use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graft::{DEFAULT_ARRAY_NAME, DEFAULT_CAPACITY};

#[derive(Parser)]
#[command(name = "graft")]
#[command(about = "Signature-driven source patcher", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a signature table to a source file
    Patch {
        /// Signature table (JSON)
        #[arg(short, long, env = "GRAFT_TABLE")]
        table: PathBuf,

        /// Source to patch (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the result (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum size of the patched source in bytes
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,

        /// Print the patch report as JSON to stderr
        #[arg(long)]
        report: bool,
    },
    /// Show where each table entry would match, without patching
    Scan {
        #[arg(short, long, env = "GRAFT_TABLE")]
        table: PathBuf,

        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Convert stdin into a zero-terminated C byte array on stdout
    GenArray {
        /// Name of the generated array
        #[arg(short, long, default_value = DEFAULT_ARRAY_NAME)]
        name: String,
    },
}
