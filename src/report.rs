use crate::error::{Result, ValidatorError};
use crate::types::ValidationResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Summary of a completed validation run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub output_file: String,
    pub completed_at: DateTime<Utc>,
}

/// Tally the run and materialize the output table, invalid rows included.
/// An all-invalid run writes no file and fails instead.
#[instrument(skip(results))]
pub fn finalize(results: &[ValidationResult], output_path: &Path) -> Result<RunSummary> {
    let total = results.len();
    let valid = results.iter().filter(|r| r.is_valid).count();

    if valid == 0 {
        return Err(ValidatorError::AllInvalid { total });
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(output_path)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", total, output_path.display());

    Ok(RunSummary {
        total,
        valid,
        invalid: total - valid,
        output_file: output_path.to_string_lossy().to_string(),
        completed_at: Utc::now(),
    })
}
