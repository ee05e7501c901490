use chrono::{DateTime, Utc};

use super::{AppointmentId, VisitDate};

/// 検証を通過し、保存を待つ予約
///
/// Validatorの成功結果。ストアへの挿入にそのまま渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub first_name: String,
    pub last_name: String,
    pub visit_date: VisitDate,
}

/// 保存済みの予約
///
/// 不変条件：同じ来訪日の予約は高々1件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub first_name: String,
    pub last_name: String,
    pub visit_date: VisitDate,
    pub created_at: DateTime<Utc>,
}
