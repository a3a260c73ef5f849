use std::io::Read;

use super::RawRow;

/// Decoded CSV upload: header row plus one field map per data row.
#[derive(Debug, Default)]
pub(crate) struct CsvUpload {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<RawRow>,
}

/// Decode a CSV upload into field maps keyed by the original header text.
///
/// Short rows simply omit the missing columns, leaving the batch processor to
/// report them per row.
pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<CsvUpload, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|value| value.is_empty()) {
            continue;
        }

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(CsvUpload {
        columns: headers.iter().map(str::to_string).collect(),
        rows,
    })
}
