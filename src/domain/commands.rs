use serde::{Deserialize, Serialize};

/// コマンド：予約を申し込む
///
/// 検証前の生の入力。空文字列を含みうる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub first_name: String,
    pub last_name: String,
    pub visit_date: String,
}

impl AppointmentRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        visit_date: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            visit_date: visit_date.into(),
        }
    }
}
