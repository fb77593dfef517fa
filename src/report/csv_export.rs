//! CSV export of the monthly series

use crate::error::Result;
use crate::projection::SeriesEntry;
use std::io::Write;
use std::path::Path;

/// Column headers of the exported file
pub const CSV_HEADER: [&str; 4] = [
    "Mes",
    "Aportación acumulada",
    "Intereses acumulados",
    "Valor total",
];

/// Write the full series as CSV, amounts rounded to `decimals` places
pub fn write_series<W: Write>(writer: W, series: &[SeriesEntry], decimals: usize) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for entry in series {
        csv_writer.write_record([
            entry.month.to_string(),
            format!("{:.*}", decimals, entry.total_contributed),
            format!("{:.*}", decimals, entry.interest_accumulated),
            format!("{:.*}", decimals, entry.total_value),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the series to a file, replacing any existing one
pub fn export_series<P: AsRef<Path>>(path: P, series: &[SeriesEntry], decimals: usize) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_series(std::io::BufWriter::new(file), series, decimals)?;
    log::info!("exported {} months to {}", series.len(), path.as_ref().display());
    Ok(())
}
