use crate::domain::RejectionReason;
use thiserror::Error;

/// 予約アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookingError {
    /// ビジネスルールによる却下
    #[error("Booking rejected: {0}")]
    Rejected(RejectionReason),

    /// 重複確認の問い合わせに失敗
    #[error("Failed checking existing appointments")]
    LookupFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 予約の保存に失敗
    #[error("Failed to create appointment")]
    InsertFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<RejectionReason> for BookingError {
    fn from(reason: RejectionReason) -> Self {
        BookingError::Rejected(reason)
    }
}

impl BookingError {
    /// 却下理由（ビジネスルール違反の場合のみ）
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            BookingError::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingError>;
