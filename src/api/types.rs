use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Appointment, commands::AppointmentRequest};

/// 予約作成リクエスト（POST /appointments）
///
/// 欠落・nullの項目は空文字列として扱い、検証で`missing_fields`になる。
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub visit_date: Option<String>,
}

impl CreateAppointmentRequest {
    /// ドメインのコマンドに変換
    pub fn into_command(self) -> AppointmentRequest {
        AppointmentRequest::new(
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.visit_date.unwrap_or_default(),
        )
    }
}

/// 予約レスポンス（201 Created）
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// YYYY-MM-DD
    pub visit_date: String,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.value(),
            first_name: appointment.first_name,
            last_name: appointment.last_name,
            visit_date: appointment.visit_date.to_string(),
            created_at: appointment.created_at,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
