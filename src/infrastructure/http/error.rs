//! HTTP Error Handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::MessageResponse;
use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求内容校验失败，返回 400 和 `{"success": false, "message": ...}`
    BadRequest(String),
    /// 交给 axum 默认处理的请求体错误（JSON 语法错误、缺少 Content-Type 等）
    Rejected(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = 400, error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, Json(MessageResponse::failure(msg))).into_response()
            }
            ApiError::Rejected(rejection) => {
                tracing::warn!(
                    status = %rejection.status().as_u16(),
                    error = %rejection.body_text(),
                    "Request body rejected"
                );
                rejection.into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // 字段缺失或类型不符属于校验失败
            JsonRejection::JsonDataError(e) => {
                ApplicationError::validation(e.body_text()).into()
            }
            other => ApiError::Rejected(other),
        }
    }
}
