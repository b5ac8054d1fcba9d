//! FILENAME: app/server/src/api_types.rs
// PURPOSE: Wire types for the calculation endpoint.

use serde::{Deserialize, Serialize};

pub const MSG_INVALID_EXPRESSION: &str = "Expression is not valid";
pub const MSG_INTERNAL_ERROR: &str = "Internal server error";
pub const MSG_INVALID_REQUEST: &str = "Invalid request";

/// Body of `POST /api/v1/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
}

/// Successful result. The number is sent as a string, e.g. "11.0".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
