// TextFilter - core/export.rs
//
// Plain-text export of matched lines.
// Core layer: writes to any Write trait object.

use crate::util::error::FilterExportError;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `lines` as UTF-8, each followed by `\n` (including the last).
///
/// `export_path` is only used for error context. The writer is flushed
/// before returning so buffered write failures are reported rather than
/// lost on drop. Returns the number of lines written.
pub fn export_lines<W: Write>(
    lines: &[String],
    writer: W,
    export_path: &Path,
) -> Result<usize, FilterExportError> {
    let mut out = BufWriter::new(writer);

    for line in lines {
        out.write_all(line.as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .map_err(|e| FilterExportError::write(export_path, e))?;
    }

    out.flush()
        .map_err(|e| FilterExportError::write(export_path, e))?;

    Ok(lines.len())
}
