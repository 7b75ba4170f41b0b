use crate::error::{Result, ValidatorError};
use crate::types::{AddressVerifier, Credential, InputRecord, VerifiedAddress};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Deserialize)]
struct AddressResponse {
    #[serde(default)]
    address: VerifiedAddress,
}

/// USPS Addresses v3 client. Holds the bearer credential for the lifetime
/// of the run; the token is never refreshed mid-run.
pub struct UspsAddressApi {
    client: reqwest::Client,
    address_url: String,
    credential: Credential,
}

impl UspsAddressApi {
    pub fn new(
        address_url: impl Into<String>,
        credential: Credential,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            address_url: address_url.into(),
            credential,
        })
    }
}

#[async_trait::async_trait]
impl AddressVerifier for UspsAddressApi {
    fn service_name(&self) -> &'static str {
        "usps"
    }

    #[instrument(skip(self, record), fields(key = %record.key))]
    async fn verify(&self, record: &InputRecord) -> Result<VerifiedAddress> {
        debug!(
            "Validating {}, {}, {} {}",
            record.street, record.city, record.state, record.post_code
        );

        let response = self
            .client
            .get(&self.address_url)
            .bearer_auth(&self.credential.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("streetAddress", record.street.as_str()),
                ("city", record.city.as_str()),
                ("state", record.state.as_str()),
                ("ZIPCode", record.post_code.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ValidatorError::Api {
                message: format!("address endpoint returned {status}: {body}"),
            });
        }

        let parsed: AddressResponse = response.json().await?;
        Ok(parsed.address)
    }
}
