//! The uniform `{success, data|error}` response wrapper.
//!
//! Every dashboard API endpoint answers with this envelope; bulk upsert uses
//! a count-carrying variant. Unwrap helpers normalize application failures
//! into `ApiError::Rejected` carrying the server message, falling back to the
//! operation's fixed message when the server omits one.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::types::DailyDataPayload;

/// Response wrapper returned by every endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parse a response body into an envelope. A body that is not valid
    /// envelope JSON is a transport-class failure.
    pub fn parse(response: &HttpResponse) -> Result<Self, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| {
            ApiError::Transport(format!(
                "HTTP {}: response is not a valid envelope: {e}",
                response.status
            ))
        })
    }

    /// Unwrap the payload, normalizing `success: false` (and a success
    /// envelope with no payload) into `Rejected`.
    pub fn into_result(self, fallback: &str) -> Result<T, ApiError> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Rejected(fallback.to_string()))
        } else {
            Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

impl Envelope<bool> {
    /// Unwrap a delete-style envelope. The server reports the outcome as a
    /// boolean `data`; an omitted payload on a success envelope means deleted.
    pub fn into_flag(self, fallback: &str) -> Result<bool, ApiError> {
        if self.success {
            Ok(self.data.unwrap_or(true))
        } else {
            Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

/// Response wrapper for the bulk daily-data upsert.
#[derive(Debug, Deserialize)]
pub struct BulkEnvelope {
    pub success: bool,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BulkEnvelope {
    pub fn parse(response: &HttpResponse) -> Result<Self, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| {
            ApiError::Transport(format!(
                "HTTP {}: response is not a valid envelope: {e}",
                response.status
            ))
        })
    }

    pub fn into_count(self, fallback: &str) -> Result<u64, ApiError> {
        if self.success {
            self.count
                .ok_or_else(|| ApiError::Rejected(fallback.to_string()))
        } else {
            Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

/// Request body for the bulk daily-data upsert: `{"data": [...]}`.
#[derive(Debug, Serialize)]
pub struct BulkRequest {
    pub data: Vec<DailyDataPayload>,
}
