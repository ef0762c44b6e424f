//! Load projection inputs from a scenarios CSV
//!
//! Expected header: `InitialInvestment,MonthlyRatePercent`

use super::ProjectionInput;
use crate::error::LoadError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the scenarios file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InitialInvestment")]
    initial_investment: f64,
    #[serde(rename = "MonthlyRatePercent")]
    monthly_rate_percent: f64,
}

impl CsvRow {
    fn into_input(self, row: usize) -> Result<ProjectionInput, LoadError> {
        let input = ProjectionInput::new(self.initial_investment, self.monthly_rate_percent);
        input
            .validate()
            .map_err(|source| LoadError::InvalidRow { row, source })?;
        Ok(input)
    }
}

/// Load all inputs from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectionInput>, LoadError> {
    let reader = Reader::from_path(path)?;
    collect_inputs(reader)
}

/// Load inputs from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ProjectionInput>, LoadError> {
    collect_inputs(Reader::from_reader(reader))
}

fn collect_inputs<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<ProjectionInput>, LoadError> {
    let mut inputs = Vec::new();

    // Row numbers are 1-based and skip the header, matching what a spreadsheet shows
    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        inputs.push(row.into_input(idx + 2)?);
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_inputs_from_reader() {
        let data = "InitialInvestment,MonthlyRatePercent\n40000,5\n10000,3.0\n2000,1.5\n";
        let inputs = load_inputs_from_reader(data.as_bytes()).unwrap();

        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0], ProjectionInput::new(40_000.0, 5.0));
        assert_eq!(inputs[2].monthly_rate_percent, 1.5);
    }

    #[test]
    fn test_invalid_row_reports_line() {
        let data = "InitialInvestment,MonthlyRatePercent\n40000,5\n10000,0\n";
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();

        match err {
            LoadError::InvalidRow { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let data = "InitialInvestment,MonthlyRatePercent\nabc,5\n";
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_inputs("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }
}
