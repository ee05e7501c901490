use crate::domain::{Appointment, NewAppointment, VisitDate};
use async_trait::async_trait;
use thiserror::Error;

/// ストア操作のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// 同じ来訪日の予約が既に存在する（一意制約違反）
    #[error("an appointment already exists for {0}")]
    Conflict(VisitDate),

    /// ストレージ基盤の障害
    #[error("appointment storage failure")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// 予約ストアポート
///
/// 存在確認と挿入は別操作として提供する。
/// 挿入時の一意性はストレージ側で保証し、違反は`StoreError::Conflict`として返す。
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// 指定日に予約が存在するか確認する
    ///
    /// 呼び出し開始前にコミットされた挿入はすべて反映される。
    async fn exists(&self, visit_date: VisitDate) -> Result<bool>;

    /// 予約を挿入し、採番されたIDと作成時刻付きで返す
    ///
    /// 同じ来訪日の予約が既にある場合は、同時実行時も含め`StoreError::Conflict`。
    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment>;
}
