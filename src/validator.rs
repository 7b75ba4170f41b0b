use crate::types::{AddressVerifier, InputRecord, ValidationResult};
use tracing::warn;

/// Validate one record against the remote service. Every failure class is
/// captured into the result row rather than propagated, so one bad address
/// can never abort the batch. Each record is attempted exactly once.
pub async fn validate_record(api: &dyn AddressVerifier, record: &InputRecord) -> ValidationResult {
    match api.verify(record).await {
        Ok(address) => ValidationResult::from_verified(record, &address),
        Err(e) => {
            warn!("Validation failed for KEY {}: {}", record.key, e);
            println!("   ⚠️  Validation failed for KEY {}: {}", record.key, e);
            ValidationResult::failure(record, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ValidatorError};
    use crate::types::VerifiedAddress;

    struct AlwaysFails;

    #[async_trait::async_trait]
    impl AddressVerifier for AlwaysFails {
        fn service_name(&self) -> &'static str {
            "always-fails"
        }

        async fn verify(&self, _record: &InputRecord) -> Result<VerifiedAddress> {
            Err(ValidatorError::Api {
                message: "address endpoint returned 500 Internal Server Error".to_string(),
            })
        }
    }

    struct AlwaysVerifies;

    #[async_trait::async_trait]
    impl AddressVerifier for AlwaysVerifies {
        fn service_name(&self) -> &'static str {
            "always-verifies"
        }

        async fn verify(&self, record: &InputRecord) -> Result<VerifiedAddress> {
            Ok(VerifiedAddress {
                street_address: Some(record.street.to_uppercase()),
                city: Some(record.city.to_uppercase()),
                state: Some(record.state.clone()),
                zip_code: Some(record.post_code.clone()),
                zip_plus4: None,
            })
        }
    }

    fn record() -> InputRecord {
        InputRecord {
            key: "7".to_string(),
            street: "600 4th Ave".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            post_code: "98104".to_string(),
        }
    }

    #[tokio::test]
    async fn remote_failure_is_downgraded_to_an_invalid_row() {
        let result = validate_record(&AlwaysFails, &record()).await;
        assert!(!result.is_valid);
        assert_eq!(result.full_zip4, "ERROR");
        assert!(result
            .error_message
            .as_deref()
            .unwrap()
            .contains("500 Internal Server Error"));
        assert_eq!(result.original_post_code, "98104");
    }

    #[tokio::test]
    async fn successful_verification_echoes_originals_and_normalizes() {
        let result = validate_record(&AlwaysVerifies, &record()).await;
        assert!(result.is_valid);
        assert_eq!(result.validated_street.as_deref(), Some("600 4TH AVE"));
        assert_eq!(result.original_street, "600 4th Ave");
        assert_eq!(result.full_zip4, "98104");
        assert_eq!(result.error_message, None);
    }
}
