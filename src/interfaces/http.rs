//! HTTP surface: `POST /api/predict` and `GET /health`.

use crate::application::prediction_service::PredictionService;
use crate::domain::errors::PredictionError;
use crate::domain::types::{PredictionRequest, PredictionResult};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::any::Any as PanicPayload;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

#[derive(Clone)]
struct AppState {
    service: PredictionService,
}

/// Uniform failure response: a status and a non-empty `detail` message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    model: &'a str,
    version: &'a str,
}

pub fn router(service: PredictionService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/predict", post(predict))
        .route("/health", get(health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .with_state(AppState { service })
}

async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    match state.service.predict(&request) {
        Ok(prediction) => Ok(Json(PredictionResult::success(prediction.class))),
        Err(e) => {
            error!(error = %e, "Prediction error");
            Err(e.into())
        }
    }
}

// A backend that panics outside its own guard still yields the uniform 500.
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let err = PredictionError::from_panic(payload);
    error!(error = %err, "Prediction handler panicked");
    ApiError::from(err).into_response()
}

async fn health(State(state): State<AppState>) -> Response {
    Json(HealthResponse {
        status: "ok",
        model: state.service.model_name(),
        version: state.service.model_version(),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_errors_map_to_500() {
        let errors = [
            PredictionError::unavailable("not loaded"),
            PredictionError::SchemaMismatch {
                field: "Basic_Demos-Sex".to_string(),
            },
            PredictionError::inference("boom"),
        ];

        for err in errors {
            let message = err.to_string();
            let api_error = ApiError::from(err);
            assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_error.detail(), message);
            assert!(!api_error.detail().is_empty());
        }
    }
}
