//! Liveness probe.
//!
//! Answers without touching the recipe store, so it stays green while the
//! database is unreachable.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

const STATUS_OK: &str = "ok";

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving
    pub status: String,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Liveness check")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_OK.to_string(),
    })
}
