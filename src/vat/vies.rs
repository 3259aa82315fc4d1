//! EU VIES REST API client for VAT number validation.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::external::{ExternalValidityCheck, ExternalValidityOutcome};

/// Public VIES endpoint. No authentication required.
pub const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Result of a VIES VAT number check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViesResult {
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Date VIES answered the request.
    pub request_date: Option<NaiveDate>,
    /// Registered company name (if available).
    pub name: Option<String>,
    /// Registered address (if available).
    pub address: Option<String>,
}

/// Error from the VIES API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// Network or HTTP error.
    #[error("VIES network error: {0}")]
    Network(String),
    /// The VIES API returned an error (e.g. member state unavailable).
    #[error("VIES API error: {0}")]
    ApiError(String),
    /// Failed to parse the response.
    #[error("VIES parse error: {0}")]
    ParseError(String),
}

/// Connection settings for [`ViesClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViesConfig {
    /// Endpoint accepting the `check-vat-number` JSON request.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            endpoint: VIES_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ViesConfig {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// `userError` codes meaning "ask again later" rather than "not registered".
const UNAVAILABLE_USER_ERRORS: &[&str] = &[
    "GLOBAL_MAX_CONCURRENT_REQ",
    "MS_MAX_CONCURRENT_REQ",
    "MS_UNAVAILABLE",
    "SERVER_BUSY",
    "SERVICE_UNAVAILABLE",
    "TIMEOUT",
];

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    user_error: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// VIES API request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViesRequest<'a> {
    country_code: String,
    vat_number: &'a str,
}

/// Blocking VIES client.
///
/// Cheap to clone; clones share the connection pool. Do not create or drop
/// it from inside an async runtime, as the blocking client runs its own.
#[derive(Debug, Clone)]
pub struct ViesClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl ViesClient {
    /// Client for the public VIES endpoint with a 30 second timeout.
    pub fn new() -> Result<Self, ViesError> {
        Self::with_config(&ViesConfig::default())
    }

    pub fn with_config(config: &ViesConfig) -> Result<Self, ViesError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ViesError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Check a VAT number against the EU VIES API.
    ///
    /// `country_code` is the VAT prefix (e.g. "DE", "EL").
    /// `vat_number` is the number part without the country prefix.
    ///
    /// # Errors
    ///
    /// Returns `ViesError::Network` on connection issues,
    /// `ViesError::ApiError` if a member state is unavailable,
    /// `ViesError::ParseError` on unexpected response formats.
    #[tracing::instrument(skip(self))]
    pub fn lookup(&self, country_code: &str, vat_number: &str) -> Result<ViesResult, ViesError> {
        let req = ViesRequest {
            country_code: country_code.to_uppercase(),
            vat_number,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&req)
            .send()
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| ViesError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ViesError::ApiError(format!("HTTP {status}: {body}")));
        }

        let result = parse_response(&body)?;
        debug!(valid = result.valid, "VIES answered");
        Ok(result)
    }
}

impl ExternalValidityCheck for ViesClient {
    fn check(&self, country_code: &str, local_part: &str) -> ExternalValidityOutcome {
        match self.lookup(country_code, local_part) {
            Ok(result) if result.valid => ExternalValidityOutcome::Valid,
            Ok(_) => ExternalValidityOutcome::Invalid,
            Err(e) => {
                warn!(error = %e, country_code, "VIES lookup failed");
                ExternalValidityOutcome::Unavailable
            }
        }
    }
}

/// Interpret a successful (HTTP 2xx) VIES response body.
fn parse_response(body: &str) -> Result<ViesResult, ViesError> {
    let api_resp: ViesApiResponse = serde_json::from_str(body)
        .map_err(|e: serde_json::Error| ViesError::ParseError(e.to_string()))?;

    // Check for API-level errors
    if let Some(err) = api_resp.error_wrappers.as_ref().and_then(|e| e.first()) {
        let msg = err
            .message
            .clone()
            .or_else(|| err.error.clone())
            .unwrap_or_else(|| "unknown error".into());
        return Err(ViesError::ApiError(msg));
    }

    if let Some(code) = api_resp.user_error.as_deref() {
        if UNAVAILABLE_USER_ERRORS.contains(&code) {
            return Err(ViesError::ApiError(code.to_string()));
        }
    }

    let Some(valid) = api_resp.valid else {
        return Err(ViesError::ParseError("response has no 'valid' field".into()));
    };

    Ok(ViesResult {
        valid,
        request_date: api_resp.request_date.as_deref().and_then(parse_request_date),
        name: api_resp.name.filter(|n| n != "---" && !n.is_empty()),
        address: api_resp.address.filter(|a| a != "---" && !a.is_empty()),
    })
}

/// VIES sends either `2024-01-15+01:00` or a full ISO timestamp.
fn parse_request_date(raw: &str) -> Option<NaiveDate> {
    raw.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}
