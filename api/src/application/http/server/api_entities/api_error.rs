use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;
use vegscan_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM_ERROR"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_UPSTREAM_UNREACHABLE")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match &error {
            CoreError::InvalidBarcode(_) => ApiError::BadRequest(error.user_message()),
            CoreError::ProductNotFound => ApiError::NotFound(error.user_message()),
            CoreError::NotFound => ApiError::NotFound("Scan not found".to_string()),
            CoreError::ProductDatabaseUnavailable(_) => {
                ApiError::ServiceUnavailable(error.user_message())
            }
            CoreError::ProductDatabaseError { .. }
            | CoreError::ProductDatabaseInvalidResponse(_) => {
                tracing::error!("Product database failure: {}", error);
                ApiError::BadGateway(error.user_message())
            }
            _ => {
                tracing::error!("Unexpected core error: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string().replace('\n', ", ")))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let cases = [
            (CoreError::InvalidBarcode("1".into()), StatusCode::BAD_REQUEST),
            (CoreError::ProductNotFound, StatusCode::NOT_FOUND),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::ProductDatabaseUnavailable("timeout".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CoreError::ProductDatabaseError {
                    status: 500,
                    message: String::new(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::ProductDatabaseInvalidResponse("expected value at line 1".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_unreadable_database_response_hides_parser_detail() {
        let error = ApiError::from(CoreError::ProductDatabaseInvalidResponse(
            "expected value at line 1 column 1".into(),
        ));
        assert_eq!(
            error.to_string(),
            "The product database sent a response that could not be read."
        );
    }
}
