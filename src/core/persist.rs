use crate::domain::model::WeatherTable;
use crate::utils::error::{EtlError, Result};

/// Encodes the table as CSV: `time` first, then the metric columns in their
/// original order, one row per date, no index column.
pub fn table_to_csv(table: &WeatherTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push("time".to_string());
    header.extend(table.columns.iter().map(|c| c.name.clone()));
    writer.write_record(&header)?;

    for (row, date) in table.dates.iter().enumerate() {
        let mut record = Vec::with_capacity(header.len());
        record.push(date.format("%Y-%m-%d").to_string());
        for column in &table.columns {
            record.push(column.values[row].to_string());
        }
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::Io(std::io::Error::other(e.to_string())))
}
