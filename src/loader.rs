use crate::model::{LoadError, Row, Table};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads a comma-separated source file into a [`Table`].
///
/// The first line holds the column names and is discarded. Every
/// remaining line is split on `,` into one [`Row`]; the format carries
/// no quoting or escaping. Open and read failures surface as
/// [`LoadError::Io`].
pub fn load_table(path: impl AsRef<Path>) -> Result<Table, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i == 0 {
            continue; // header row
        }
        rows.push(Row::new(line.split(',').map(str::to_owned).collect()));
    }

    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(Table { rows })
}
