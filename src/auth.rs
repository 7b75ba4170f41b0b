use crate::config::Credentials;
use crate::constants::OAUTH_SCOPE;
use crate::error::{Result, ValidatorError};
use crate::types::Credential;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
    scope: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
}

/// Client for the OAuth2 token endpoint. A failure here is fatal for the
/// whole run; no addresses are validated without a credential.
pub struct TokenClient {
    client: reqwest::Client,
    token_url: String,
}

impl TokenClient {
    pub fn new(token_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            token_url: token_url.into(),
        })
    }

    /// Exchange the client identity for a short-lived bearer token.
    #[instrument(skip(self, credentials))]
    pub async fn acquire(&self, credentials: &Credentials) -> Result<Credential> {
        let payload = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: "client_credentials",
            scope: OAUTH_SCOPE,
        };

        let response = self
            .client
            .post(&self.token_url)
            .form(&payload)
            .send()
            .await
            .map_err(|e| ValidatorError::Auth {
                message: format!("token request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ValidatorError::Auth {
                message: format!("token endpoint returned {status}: {body}"),
            });
        }

        let body = response.text().await.map_err(|e| ValidatorError::Auth {
            message: format!("failed to read token response: {e}"),
        })?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| ValidatorError::Auth {
                message: format!("token response was not valid JSON: {e}"),
            })?;

        let access_token = match token.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(ValidatorError::Auth {
                    message: format!("access token not found in response: {body}"),
                })
            }
        };

        let expires_in = token.expires_in.unwrap_or(0);
        info!("Retrieved access token, expires in {expires_in} seconds");

        Ok(Credential {
            access_token,
            expires_in,
        })
    }
}
