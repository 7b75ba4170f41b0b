use anyhow::Result;
use std::fs;

use address_validator::error::ValidatorError;
use address_validator::input::load_input_csv;

#[test]
fn excel_file_is_rejected_without_being_read() -> Result<()> {
    let dir = tempfile::tempdir()?;
    // No such file exists; the extension check alone must reject it
    let err = load_input_csv(dir.path(), "addresses.xlsx").unwrap_err();

    assert!(matches!(err, ValidatorError::Input(_)));
    assert_eq!(err.to_string(), "Input error: Please convert your Excel file to a .csv");
    Ok(())
}

#[test]
fn filename_without_extension_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = load_input_csv(dir.path(), "addresses").unwrap_err();

    assert!(matches!(err, ValidatorError::Input(_)));
    assert!(err.to_string().contains("Missing .csv extension"));
    Ok(())
}

#[test]
fn missing_file_reports_the_data_folder() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = load_input_csv(dir.path(), "nowhere.csv").unwrap_err();

    assert!(matches!(err, ValidatorError::Input(_)));
    assert!(err.to_string().contains("not found"));
    Ok(())
}

#[test]
fn well_formed_csv_loads_in_file_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("addresses.csv"),
        "KEY,STREET,CITY,STATE,POST_CODE\n\
         10,600 4th Ave,Seattle,WA,98104\n\
         11,475 LEnfant Plaza SW,Washington,DC,20260\n\
         12,1 Infinite Loop,Cupertino,CA,95014\n",
    )?;

    let records = load_input_csv(dir.path(), "addresses.csv")?;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].key, "10");
    assert_eq!(records[0].street, "600 4th Ave");
    assert_eq!(records[1].city, "Washington");
    assert_eq!(records[2].post_code, "95014");
    let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["10", "11", "12"]);
    Ok(())
}

#[test]
fn quoted_fields_with_commas_survive_loading() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("addresses.csv"),
        "KEY,STREET,CITY,STATE,POST_CODE\n\
         20,\"123 Main St, Apt 4\",Seattle,WA,98101\n",
    )?;

    let records = load_input_csv(dir.path(), "addresses.csv")?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].street, "123 Main St, Apt 4");
    Ok(())
}

#[test]
fn table_missing_required_columns_fails_to_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("addresses.csv"),
        "KEY,STREET\n1,600 4th Ave\n",
    )?;

    let result = load_input_csv(dir.path(), "addresses.csv");
    assert!(result.is_err());
    Ok(())
}
