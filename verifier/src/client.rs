//! HTTP client for the init-data verification endpoint.

use crate::error::VerifierError;
use crate::InitDataVerifier;

use miniapp_types::{InitDataCandidate, VerificationResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of the verification endpoint, relative to the backend base URL.
pub const AUTH_INIT_PATH: &str = "/auth/init";

/// Path of the backend liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Client for the backend verification endpoint.
///
/// Sends `POST /auth/init` with the candidate and reports what came back.
pub struct VerifierClient {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    base_url: String,
}

/// Request body of `POST /auth/init`.
///
/// Borrows the candidate so the exact bytes read from the source are the
/// bytes serialized.
#[derive(Debug, Serialize)]
struct AuthInitRequest<'a> {
    init_data: &'a str,
}

/// Response of `GET /health`: `{"status": "ok"}`.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl VerifierClient {
    /// Create a client without a request timeout: a hung endpoint hangs the
    /// caller.
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client that abandons requests after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the verification endpoint.
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.base_url, AUTH_INIT_PATH)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit `candidate` once and report the result.
    ///
    /// Network errors and bodies that are not JSON become a result with
    /// `ok == false` and status `0`; nothing is propagated.
    pub async fn verify(&self, candidate: &InitDataCandidate) -> VerificationResult {
        match self.submit(candidate).await {
            Ok(result) => {
                tracing::debug!(status = result.status, "verification endpoint answered");
                result
            }
            Err(e) => {
                tracing::warn!("verification request failed: {e}");
                VerificationResult::transport_failure(e.to_string())
            }
        }
    }

    async fn submit(
        &self,
        candidate: &InitDataCandidate,
    ) -> Result<VerificationResult, VerifierError> {
        let response = self
            .http_client
            .post(self.auth_url())
            .json(&AuthInitRequest {
                init_data: candidate.as_str(),
            })
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status().as_u16();
        let body: serde_json::Value = response.json().await.map_err(|e| {
            VerifierError::InvalidResponse(format!("failed to parse verification response: {e}"))
        })?;

        Ok(VerificationResult::from_response(status, body))
    }

    /// Probe `GET /health`. `Ok(true)` when the backend reports `"ok"`.
    pub async fn health(&self) -> Result<bool, VerifierError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(VerifierError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let health: HealthResponse = response.json().await.map_err(|e| {
            VerifierError::InvalidResponse(format!("failed to parse health response: {e}"))
        })?;
        Ok(health.status == "ok")
    }
}

impl InitDataVerifier for VerifierClient {
    async fn verify(&self, candidate: &InitDataCandidate) -> VerificationResult {
        VerifierClient::verify(self, candidate).await
    }
}

fn map_send_error(e: reqwest::Error) -> VerifierError {
    if e.is_timeout() {
        VerifierError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        VerifierError::Unreachable(format!("connection failed: {e}"))
    } else {
        VerifierError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_url_ignores_trailing_slash() {
        let client = VerifierClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.auth_url(), "http://127.0.0.1:8000/auth/init");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn client_with_timeout() {
        let client = VerifierClient::with_timeout("http://localhost", Duration::from_secs(5));
        assert_eq!(client.auth_url(), "http://localhost/auth/init");
    }

    #[test]
    fn request_body_carries_candidate_verbatim() {
        let candidate =
            InitDataCandidate::new("query_id=AAH&user=%7B%22id%22%3A42%7D&hash=a1+b2").unwrap();
        let body = serde_json::to_value(AuthInitRequest {
            init_data: candidate.as_str(),
        })
        .unwrap();
        assert_eq!(body["init_data"].as_str(), Some(candidate.as_str()));
    }

    #[test]
    fn health_response_deserialization() {
        let resp: HealthResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(resp.status, "ok");
    }
}
