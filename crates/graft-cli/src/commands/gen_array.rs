//! Attack-array generator command.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Run the gen-array command over stdin/stdout
pub fn run(name: &str) -> Result<()> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let count = graft::generate(&mut stdin, &mut stdout, name)?;
    stdout.flush()?;
    debug!("Wrote {} bytes as array '{}'", count, name);
    Ok(())
}
