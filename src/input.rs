use crate::constants::EXCEL_EXTENSIONS;
use crate::error::{Result, ValidatorError};
use crate::types::InputRecord;
use std::path::Path;
use tracing::info;

/// Check the filename against the supported-format rules before touching
/// the filesystem. Spreadsheet workbooks get a corrective message; anything
/// without a literal .csv extension is rejected outright.
fn check_extension(filename: &str) -> Result<()> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    if !name.contains('.') {
        return Err(ValidatorError::Input("Missing .csv extension".to_string()));
    }

    let lower = filename.to_lowercase();
    if EXCEL_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return Err(ValidatorError::Input(
            "Please convert your Excel file to a .csv".to_string(),
        ));
    }

    if !lower.ends_with(".csv") {
        return Err(ValidatorError::Input("Missing .csv extension".to_string()));
    }

    Ok(())
}

/// Load the caller-supplied table from the data directory. Rows are kept
/// in file order; the KEY column is treated as opaque and never checked
/// for uniqueness.
pub fn load_input_csv(data_dir: &Path, filename: &str) -> Result<Vec<InputRecord>> {
    check_extension(filename)?;

    let csv_path = data_dir.join(filename);
    if !csv_path.exists() {
        return Err(ValidatorError::Input(format!(
            "'{}' not found in {}/ folder. Please check this file has been moved to the right folder",
            filename,
            data_dir.display()
        )));
    }

    let mut reader = csv::Reader::from_path(&csv_path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: InputRecord = row?;
        records.push(record);
    }

    info!(
        "Loaded {} records from '{}'",
        records.len(),
        csv_path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excel_extensions_get_the_corrective_message() {
        for name in [
            "addresses.xlsx",
            "addresses.xlsm",
            "addresses.xls",
            "ADDRESSES.XLSX",
        ] {
            let err = check_extension(name).unwrap_err();
            assert!(
                err.to_string().contains("convert your Excel file"),
                "wrong message for {name}: {err}"
            );
        }
    }

    #[test]
    fn missing_or_unknown_extensions_are_rejected() {
        for name in ["addresses", "addresses.txt", "addresses.json"] {
            let err = check_extension(name).unwrap_err();
            assert!(
                err.to_string().contains("Missing .csv extension"),
                "wrong message for {name}: {err}"
            );
        }
    }

    #[test]
    fn csv_extension_is_accepted_case_insensitively() {
        assert!(check_extension("addresses.csv").is_ok());
        assert!(check_extension("ADDRESSES.CSV").is_ok());
    }
}
