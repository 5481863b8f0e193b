//! `--dump-catalog`: print the built-in content as JSON.

use std::io::Write;

use crate::catalog::Catalogs;
use crate::error::CluckResult;

/// Write the built-in catalogs to `writer` as pretty-printed JSON.
pub fn write_catalog<W: Write>(writer: &mut W) -> CluckResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &Catalogs::builtin())?;
    writeln!(writer)?;
    Ok(())
}

pub fn handle_dump_catalog_command() -> CluckResult<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_catalog(&mut lock)
}
