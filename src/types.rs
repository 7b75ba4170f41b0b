use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Sentinel written to `full_zip4` when the remote call failed outright.
pub const FULL_ZIP4_ERROR: &str = "ERROR";

/// Sentinel written to `full_zip4` when the call succeeded but the service
/// returned no ZIP code at all.
pub const FULL_ZIP4_MISSING: &str = "N/A";

/// One row of the caller-supplied address table. Field names mirror the
/// CSV headers exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "KEY")]
    pub key: String,
    #[serde(rename = "STREET")]
    pub street: String,
    #[serde(rename = "CITY")]
    pub city: String,
    #[serde(rename = "STATE")]
    pub state: String,
    #[serde(rename = "POST_CODE")]
    pub post_code: String,
}

/// Short-lived bearer token for the verification service. Acquired once
/// per run and never refreshed.
#[derive(Debug, Clone)]
pub struct Credential {
    pub access_token: String,
    pub expires_in: u64,
}

/// The nested `address` object of a successful verification response.
/// Absent fields deserialize to `None`, never to an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifiedAddress {
    #[serde(rename = "streetAddress")]
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "ZIPCode")]
    pub zip_code: Option<String>,
    #[serde(rename = "ZIPPlus4")]
    pub zip_plus4: Option<String>,
}

/// Outcome of validating one input record. Serialized field names form the
/// output table header.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "KEY")]
    pub key: String,
    #[serde(rename = "original_STREET")]
    pub original_street: String,
    #[serde(rename = "original_CITY")]
    pub original_city: String,
    #[serde(rename = "original_STATE")]
    pub original_state: String,
    #[serde(rename = "original_POST_CODE")]
    pub original_post_code: String,
    #[serde(rename = "validated_STREET")]
    pub validated_street: Option<String>,
    #[serde(rename = "validated_CITY")]
    pub validated_city: Option<String>,
    #[serde(rename = "validated_STATE")]
    pub validated_state: Option<String>,
    #[serde(rename = "validated_ZIPCode")]
    pub validated_zip_code: Option<String>,
    #[serde(rename = "validated_ZIPPlus4")]
    pub validated_zip_plus4: Option<String>,
    pub full_zip4: String,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl ValidationResult {
    /// Build a result from a successful verification response. The record
    /// counts as valid only when street, city, state and ZIP code all came
    /// back populated.
    pub fn from_verified(record: &InputRecord, address: &VerifiedAddress) -> Self {
        let zip_code = non_empty(&address.zip_code);
        let zip_plus4 = non_empty(&address.zip_plus4);

        let full_zip4 = match (zip_code, zip_plus4) {
            (Some(zip), Some(plus4)) => format!("{zip}-{plus4}"),
            (Some(zip), None) => zip.to_string(),
            (None, _) => FULL_ZIP4_MISSING.to_string(),
        };

        let is_valid = non_empty(&address.street_address).is_some()
            && non_empty(&address.city).is_some()
            && non_empty(&address.state).is_some()
            && zip_code.is_some();

        Self {
            key: record.key.clone(),
            original_street: record.street.clone(),
            original_city: record.city.clone(),
            original_state: record.state.clone(),
            original_post_code: record.post_code.clone(),
            validated_street: address.street_address.clone(),
            validated_city: address.city.clone(),
            validated_state: address.state.clone(),
            validated_zip_code: address.zip_code.clone(),
            validated_zip_plus4: address.zip_plus4.clone(),
            full_zip4,
            is_valid,
            error_message: None,
        }
    }

    /// Build the failure row for a record whose remote call failed. All
    /// validated fields stay empty and `full_zip4` carries the error
    /// sentinel.
    pub fn failure(record: &InputRecord, message: String) -> Self {
        Self {
            key: record.key.clone(),
            original_street: record.street.clone(),
            original_city: record.city.clone(),
            original_state: record.state.clone(),
            original_post_code: record.post_code.clone(),
            validated_street: None,
            validated_city: None,
            validated_state: None,
            validated_zip_code: None,
            validated_zip_plus4: None,
            full_zip4: FULL_ZIP4_ERROR.to_string(),
            is_valid: false,
            error_message: Some(message),
        }
    }
}

/// Seam over the remote verification service so the pipeline can be
/// exercised without network access.
#[async_trait::async_trait]
pub trait AddressVerifier: Send + Sync {
    /// Identifier for this verification backend, used in logs.
    fn service_name(&self) -> &'static str;

    /// Verify a single address, returning the service's normalized form.
    async fn verify(&self, record: &InputRecord) -> Result<VerifiedAddress>;
}
