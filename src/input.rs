//! Drive-file reading.
//!
//! Pro Football Reference box-score exports are comma-separated with a
//! repeated header row and occasional decoration. The reader keeps the
//! tolerant shape rules of those exports: anything that is not a plausible
//! drive row is skipped, while rows that pass the shape check are handed to
//! the normalizer, which is strict about their content.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::core::normalize::RawDriveRow;
use crate::error::DriveChartResult;

/// Comma-separated fields a structurally valid drive row must have.
pub const MIN_FIELD_COUNT: usize = 8;

/// Reads drive rows from a file on disk.
pub fn read_drive_file(path: impl AsRef<Path>) -> DriveChartResult<Vec<RawDriveRow>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let rows = read_drive_rows(BufReader::new(file))?;
    debug!(path = %path.display(), count = rows.len(), "read drive file");
    Ok(rows)
}

/// Reads drive rows from any buffered source.
///
/// Blank lines, header rows (any line containing `Quarter`) and lines with
/// fewer than eight comma-separated fields are skipped. Fields past the
/// comment column are folded back into the comment, so free-text comments
/// may themselves contain commas.
pub fn read_drive_rows(reader: impl BufRead) -> DriveChartResult<Vec<RawDriveRow>> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }
        if line.contains("Quarter") {
            debug!(line_number, "skipping header row");
            continue;
        }

        let mut fields: Vec<String> = line.split(',').map(str::to_owned).collect();
        if fields.len() < MIN_FIELD_COUNT {
            debug!(
                line_number,
                field_count = fields.len(),
                "skipping short row"
            );
            continue;
        }
        if fields.len() > MIN_FIELD_COUNT + 1 {
            let folded = fields.split_off(MIN_FIELD_COUNT).join(",");
            fields.push(folded);
        }

        rows.push(RawDriveRow {
            line_number,
            fields,
        });
    }
    Ok(rows)
}
