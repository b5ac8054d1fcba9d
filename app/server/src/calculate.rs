//! FILENAME: app/server/src/calculate.rs
// PURPOSE: HTTP handler for expression evaluation and its error mapping.
// CONTEXT: The body is decoded by hand so a missing Content-Type header is
// not an error. Every failure is turned into a JSON `{"error": ...}` body;
// the message depends on the configured ErrorPolicy, the status does not.

use crate::api_types::{
    CalculateRequest, CalculateResponse, ErrorResponse, MSG_INTERNAL_ERROR,
    MSG_INVALID_EXPRESSION, MSG_INVALID_REQUEST,
};
use crate::config::ErrorPolicy;
use crate::{log_enter, log_exit, log_warn, AppState};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use engine::EvalError;
use uuid::Uuid;

/// Everything a request can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Body is not a JSON object with a string `expression`.
    BadRequest,
    Evaluation {
        error: EvalError,
        policy: ErrorPolicy,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Evaluation { error, .. } if error.is_client_error() => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Evaluation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest => MSG_INVALID_REQUEST.to_string(),
            ApiError::Evaluation { error, policy: ErrorPolicy::Descriptive } => error.to_string(),
            ApiError::Evaluation { error, policy: ErrorPolicy::Generic } => {
                if error.is_client_error() {
                    MSG_INVALID_EXPRESSION.to_string()
                } else {
                    MSG_INTERNAL_ERROR.to_string()
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// `POST {route}` handler.
pub async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, ApiError> {
    let request_id = Uuid::new_v4().simple().to_string();

    let request: CalculateRequest = serde_json::from_slice(&body).map_err(|e| {
        log_warn!("CALC", "req={} undecodable body: {}", request_id, e);
        ApiError::BadRequest
    })?;

    log_enter!("CALC", "calculate", "req={} expression={:?}", request_id, request.expression);

    match state.evaluator.calculate(&request.expression) {
        Ok(result) => {
            log_exit!("CALC", "calculate", "req={} result={}", request_id, result);
            Ok(Json(CalculateResponse { result }))
        }
        Err(error) => {
            log_warn!(
                "CALC",
                "req={} failed kind={:?}: {}",
                request_id,
                error.kind(),
                error
            );
            Err(ApiError::Evaluation {
                error,
                policy: state.error_policy,
            })
        }
    }
}
