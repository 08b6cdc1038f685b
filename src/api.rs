//! HTTP surface: `POST /generate-names` and `GET /health`

use std::sync::Arc;

use chrono::Utc;
use poem::http::StatusCode;
use poem::middleware::AddData;
use poem::web::{Data, Json};
use poem::{get, handler, post, EndpointExt, IntoResponse, Response, Route};
use serde::Serialize;

use crate::service::GenerationService;
use crate::types::{ErrorResponse, GenerationRequest};

/// Message returned for every unrecoverable failure
pub const GENERIC_ERROR: &str = "Failed to generate names";

/// Health check payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub remote_configured: bool,
}

/// Build the application routes around a shared service
pub fn routes(service: Arc<GenerationService>) -> impl poem::Endpoint {
    Route::new()
        .at("/generate-names", post(generate_names))
        .at("/api/generate-names", post(generate_names))
        .at("/health", get(health))
        .with(AddData::new(service))
}

#[handler]
async fn generate_names(service: Data<&Arc<GenerationService>>, body: String) -> Response {
    let request: GenerationRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed generation request");
            return error_response(StatusCode::BAD_REQUEST);
        }
    };

    match service.handle(request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Generation request failed");
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status)
        }
    }
}

#[handler]
async fn health(service: Data<&Arc<GenerationService>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        remote_configured: service.has_remote(),
    })
}

fn error_response(status: StatusCode) -> Response {
    Json(ErrorResponse {
        error: GENERIC_ERROR.to_string(),
    })
    .with_status(status)
    .into_response()
}
