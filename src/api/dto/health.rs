//! Response body of `GET /health`.

use serde::Serialize;

/// Overall health plus the crate version that answered.
///
/// `status` is `healthy` when the storage check passed, `degraded` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-component results. The service depends only on its user store.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: CheckStatus,
}

/// `ok` or `error`, with the backend name and user count (or the failure) in
/// `message`.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
