use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::CaptureError;

/// Rows of scope metadata before the first sample row.
const HEADER_ROWS: usize = 3;

/// Zero-based CSV column holding the channel voltage.
const VOLTAGE_COLUMN: usize = 1;

/// Reads a Rigol CSV export into a voltage sample vector.
pub fn read_rigol_csv(path: &Path) -> Result<Vec<f64>, CaptureError> {
    let file = File::open(path)?;
    parse_rigol_csv(BufReader::new(file))
}

/// Parses row-per-sample capture data: one voltage per row, second column,
/// first three rows skipped unexamined.
pub fn parse_rigol_csv<R: BufRead>(reader: R) -> Result<Vec<f64>, CaptureError> {
    let mut samples = Vec::new();

    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        if row < HEADER_ROWS {
            continue;
        }

        let field = line
            .split(',')
            .nth(VOLTAGE_COLUMN)
            .ok_or_else(|| CaptureError::Malformed {
                row: row + 1,
                reason: "missing voltage column".to_string(),
            })?;
        let voltage = field
            .trim()
            .parse::<f64>()
            .map_err(|err| CaptureError::Malformed {
                row: row + 1,
                reason: err.to_string(),
            })?;
        samples.push(voltage);
    }

    Ok(samples)
}
