use thiserror::Error;

/// 予約リクエストの却下理由
///
/// `code()`はクライアントが機械的に判定するための安定した識別子。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    /// 姓・名・来訪日のいずれかが空
    #[error("First name, last name, and visit date are required")]
    MissingFields,

    /// 来訪日がYYYY-MM-DD形式でない
    #[error("Visit date must be in YYYY-MM-DD format")]
    InvalidDate,

    /// 来訪日が運用年の範囲外
    #[error("Appointments can only be scheduled within the operating year")]
    InvalidYear,

    /// 来訪日が「今日」より前
    #[error("Visit date cannot be in the past")]
    PastDate,

    /// 来訪日が祝日
    #[error("Appointments cannot be scheduled on public holidays")]
    PublicHoliday,

    /// 来訪日に既に予約がある
    #[error("An appointment is already scheduled for this date")]
    DuplicateAppointment,
}

impl RejectionReason {
    /// 機械判定用の理由コード
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::MissingFields => "missing_fields",
            RejectionReason::InvalidDate => "invalid_date",
            RejectionReason::InvalidYear => "invalid_year",
            RejectionReason::PastDate => "past_date",
            RejectionReason::PublicHoliday => "public_holiday",
            RejectionReason::DuplicateAppointment => "duplicate_appointment",
        }
    }

    /// 人間向けのメッセージ
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_codes_are_stable() {
        assert_eq!(RejectionReason::MissingFields.code(), "missing_fields");
        assert_eq!(RejectionReason::InvalidDate.code(), "invalid_date");
        assert_eq!(RejectionReason::InvalidYear.code(), "invalid_year");
        assert_eq!(RejectionReason::PastDate.code(), "past_date");
        assert_eq!(RejectionReason::PublicHoliday.code(), "public_holiday");
        assert_eq!(
            RejectionReason::DuplicateAppointment.code(),
            "duplicate_appointment"
        );
    }

    #[test]
    fn test_rejection_message_is_human_readable() {
        assert_eq!(
            RejectionReason::PastDate.message(),
            "Visit date cannot be in the past"
        );
    }
}
