//! C byte-array literal generator
//!
//! Turns arbitrary bytes into a zero-terminated `static char` array
//! declaration, one decimal value per line:
//!
//! ```text
//! static char compile_attack[] = {
//! 	72,
//! 	105,
//! 	0
//! };
//! ```
//!
//! The output is meant to be pasted or `#include`d into C source so that a
//! program can carry its own bytes as a payload.

use std::io::{Read, Write};

use crate::error::{Error, Result};

/// Array name used when none is given
pub const DEFAULT_ARRAY_NAME: &str = "compile_attack";

/// Render `bytes` as a C array declaration named `name`.
pub fn render_array(name: &str, bytes: &[u8]) -> Result<String> {
    let mut out = Vec::with_capacity(bytes.len() * 6 + name.len() + 32);
    write_array(&mut out, name, bytes)?;
    // Output is pure ASCII
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Write the declaration for `bytes` to `out`.
pub fn write_array<W: Write>(out: &mut W, name: &str, bytes: &[u8]) -> Result<()> {
    validate_name(name)?;
    write_declaration(out, name, bytes)
}

/// Read all of `input` and write its declaration to `out`.
///
/// The name is checked before any input is read.
pub fn generate<R: Read, W: Write>(input: &mut R, out: &mut W, name: &str) -> Result<usize> {
    validate_name(name)?;
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    write_declaration(out, name, &bytes)?;
    Ok(bytes.len())
}

fn write_declaration<W: Write>(out: &mut W, name: &str, bytes: &[u8]) -> Result<()> {
    writeln!(out, "static char {}[] = {{", name)?;
    for byte in bytes {
        writeln!(out, "\t{},", byte)?;
    }
    write!(out, "\t0\n}};\n\n")?;
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidArrayName(name.to_string()))
    }
}
