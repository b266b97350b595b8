use crate::prelude::*;

use std::{fs::File, io::Read, path::Path};

/// Reads `(recipient, amount)` rows from a CSV file whose first row is a header.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>, ReadRecordsError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReadRecordsError::OpenFailed {
        path: path.display().to_string(),
        underlying: e,
    })?;
    let records = read_records_from(file)?;
    info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Same as [`read_records`] over any reader. Columns after the second are ignored.
pub fn read_records_from(reader: impl Read) -> Result<Vec<Record>, ReadRecordsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| ReadRecordsError::Csv { underlying: e })?;
        let (Some(recipient), Some(amount)) = (row.get(0), row.get(1)) else {
            return Err(ReadRecordsError::MissingColumns {
                line: row.position().map(|p| p.line()).unwrap_or_default(),
                found: row.len(),
            });
        };
        records.push(Record::builder().recipient(recipient).amount(amount).build());
    }
    Ok(records)
}
