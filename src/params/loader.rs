//! Load batches of parameter sets from CSV

use super::data::{ProjectionParams, RawParams};
use super::validate::validate;
use crate::error::{ProjectionError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row, one parameter set per line
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    initial_capital: f64,
    monthly_contribution: f64,
    gross_annual_return: f64,
    annual_fee: f64,
    annual_inflation: f64,
    years: f64,
}

impl From<CsvRow> for RawParams {
    fn from(row: CsvRow) -> Self {
        RawParams {
            initial_capital: row.initial_capital,
            monthly_contribution: row.monthly_contribution,
            gross_annual_return: row.gross_annual_return,
            annual_fee: row.annual_fee,
            annual_inflation: row.annual_inflation,
            years: row.years,
        }
    }
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<ProjectionParams>> {
    let mut sets = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let raw = RawParams::from(row);
        let params = validate(&raw).map_err(|errors| ProjectionError::InvalidRow {
            row: index + 1,
            errors,
        })?;
        sets.push(params);
    }

    log::debug!("loaded {} parameter sets", sets.len());
    Ok(sets)
}

/// Load and validate all parameter sets from a CSV file
pub fn load_param_sets<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectionParams>> {
    read_rows(Reader::from_path(path)?)
}

/// Load parameter sets from any reader (e.g., string buffer, stdin)
pub fn load_param_sets_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ProjectionParams>> {
    read_rows(Reader::from_reader(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "initial_capital,monthly_contribution,gross_annual_return,annual_fee,annual_inflation,years\n";

    #[test]
    fn test_load_param_sets() {
        let data = format!("{HEADER}1000,100,0,0,0,2\n0,200,6,0.2,2,30\n");
        let sets = load_param_sets_from_reader(data.as_bytes()).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].years, 2);
        assert_eq!(sets[1].gross_annual_return, 6.0);
        assert_eq!(sets[1].total_months(), 360);
    }

    #[test]
    fn test_invalid_row_reports_row_number() {
        let data = format!("{HEADER}1000,100,0,0,0,2\n1000,100,5,0,0,80\n");
        let err = load_param_sets_from_reader(data.as_bytes()).unwrap_err();
        match err {
            ProjectionError::InvalidRow { row, errors } => {
                assert_eq!(row, 2);
                assert!(errors.field("years").is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let data = format!("{HEADER}abc,100,0,0,0,2\n");
        let err = load_param_sets_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }

    #[test]
    fn test_empty_file() {
        let sets = load_param_sets_from_reader(HEADER.as_bytes()).unwrap();
        assert!(sets.is_empty());
    }
}
