use serde::{Deserialize, Serialize};

use crate::mx::MxRecord;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub domain: String,
}

/// Success body: `mxRecords` is ordered ascending by priority.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(rename = "mxRecords")]
    pub mx_records: Vec<MxRecord>,
}

impl ValidateResponse {
    pub fn new(mx_records: Vec<MxRecord>) -> Self {
        Self {
            valid: true,
            mx_records,
        }
    }
}

/// Error body shared by every non-200 response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub valid: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: u64,
}
