//! JSON-lines rows for the aggregation layer.

use crate::ExportError;
use serde::Serialize;
use std::io::Write;

/// Write one JSON object per line. Returns the number of rows written.
pub fn write_json_lines<W, T>(mut writer: W, rows: &[T]) -> Result<usize, ExportError>
where
    W: Write,
    T: Serialize,
{
    for (row, item) in rows.iter().enumerate() {
        serde_json::to_writer(&mut writer, item)
            .map_err(|source| ExportError::Serialize { row, source })?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    log::debug!("exported {} rows", rows.len());
    Ok(rows.len())
}
