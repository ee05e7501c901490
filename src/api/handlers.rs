use crate::application::booking::{ServiceDependencies, book_appointment};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{AppointmentResponse, CreateAppointmentRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /appointments - 新しい予約を作成
///
/// 強制されるビジネスルール:
/// - 姓・名・来訪日が必須
/// - 来訪日はYYYY-MM-DD形式
/// - 来訪日は運用年内、かつ今日以降（当日可）
/// - 祝日は予約不可
/// - 1日1件まで
///
/// ボディはContent-Typeに関係なくJSONとして解釈する。`null`は空のリクエストと同じ。
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<AppointmentResponse>), ApiError> {
    let req = decode_request(&body)?;

    let appointment = book_appointment(&state.service_deps, req.into_command()).await?;

    Ok((StatusCode::CREATED, Json(AppointmentResponse::from(appointment))))
}

/// リクエストボディをデコードする
fn decode_request(body: &[u8]) -> Result<CreateAppointmentRequest, ApiError> {
    serde_json::from_slice::<Option<CreateAppointmentRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            tracing::debug!("Rejected appointment payload: {}", e);
            ApiError::InvalidJson
        })
}

/// OPTIONS /appointments - プリフライト応答（ボディなし）
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST/OPTIONS以外のメソッド
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
