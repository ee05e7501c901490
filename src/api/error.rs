use crate::application::booking::BookingError;
use crate::domain::RejectionReason;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーに加え、リクエスト解釈の失敗を表し、
/// HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// リクエストボディがJSONとして解釈できない
    InvalidJson,
    /// POST以外のメソッド
    MethodNotAllowed,
    /// 予約処理のエラー
    Booking(BookingError),
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        ApiError::Booking(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - リクエストの形式不正
            ApiError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                "invalid_json",
                "Invalid JSON format".to_string(),
            ),

            // 405 Method Not Allowed
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                "Only POST method is allowed".to_string(),
            ),

            // 409 Conflict - 同日の予約が既にある
            ApiError::Booking(BookingError::Rejected(
                reason @ RejectionReason::DuplicateAppointment,
            )) => (StatusCode::CONFLICT, reason.code(), reason.message()),

            // 400 Bad Request - ビジネスルール違反
            ApiError::Booking(BookingError::Rejected(reason)) => {
                (StatusCode::BAD_REQUEST, reason.code(), reason.message())
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Booking(BookingError::LookupFailed(source)) => {
                tracing::error!("Error checking existing appointments: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Failed checking existing appointments".to_string(),
                )
            }
            ApiError::Booking(BookingError::InsertFailed(source)) => {
                tracing::error!("Error creating appointment: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Failed to create appointment".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
