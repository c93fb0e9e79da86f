//! CLI command implementations.

pub mod files;
pub mod gen_array;
pub mod patch;
pub mod scan;
