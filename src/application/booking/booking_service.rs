use crate::domain::{
    Appointment, BlockedDateSet, NewAppointment, OperatingWindow, RejectionReason,
    commands::AppointmentRequest, validation,
};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookingError, Result};

/// サービスの依存関係
///
/// 振る舞いは持たず、純粋な関数に依存関係を渡す。
/// 祝日集合と運用年は起動時に確定し、以後変更されない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub store: Arc<dyn AppointmentStore>,
    pub clock: Arc<dyn Clock>,
    pub operating_year: i32,
    pub blocked_dates: Arc<BlockedDateSet>,
}

/// 現在の運用期間を組み立てる
///
/// 長時間稼働しても日付が進むよう、リクエストごとに時計から作り直す。
fn current_window(deps: &ServiceDependencies) -> OperatingWindow {
    OperatingWindow::simulated(deps.operating_year, deps.clock.today())
}

/// 予約リクエストを検証する
///
/// ビジネスルール（この順で評価し、最初の違反を返す）：
/// - 姓・名・来訪日がすべて空でないこと
/// - 来訪日がYYYY-MM-DD形式であること
/// - 来訪日が運用年に属すること
/// - 来訪日が「今日」より前でないこと（当日は可）
/// - 来訪日が祝日でないこと
/// - 来訪日に予約がまだないこと
///
/// 最後の重複確認のみストアに問い合わせる。問い合わせ自体の失敗は
/// 「予約あり」とは区別して`BookingError::LookupFailed`で返す。
pub async fn validate_request(
    deps: &ServiceDependencies,
    request: &AppointmentRequest,
) -> Result<NewAppointment> {
    let window = current_window(deps);

    // 1〜5. 純粋な検証
    let accepted = validation::screen_request(request, &window, &deps.blocked_dates)?;

    // 6. 重複確認
    let taken = deps
        .store
        .exists(accepted.visit_date)
        .await
        .map_err(|e| match e {
            StoreError::Backend(source) => BookingError::LookupFailed(source),
            other => BookingError::LookupFailed(Box::new(other)),
        })?;

    if taken {
        return Err(BookingError::Rejected(RejectionReason::DuplicateAppointment));
    }

    Ok(accepted)
}

/// 予約を作成する
///
/// 検証を通過したリクエストのみ保存する。
///
/// # 一貫性保証
///
/// 事前の重複確認と挿入は別操作のため、その間に同じ日付の予約が
/// 確定する可能性がある。ストアの一意制約違反（`StoreError::Conflict`）は
/// 重複として`RejectionReason::DuplicateAppointment`に変換する。
///
/// # 戻り値
/// 成功時は採番済みの予約
pub async fn book_appointment(
    deps: &ServiceDependencies,
    request: AppointmentRequest,
) -> Result<Appointment> {
    let accepted = validate_request(deps, &request).await.inspect_err(|e| {
        if let Some(reason) = e.rejection() {
            tracing::debug!(reason = reason.code(), "Appointment request rejected");
        }
    })?;

    let appointment = deps.store.insert(accepted).await.map_err(|e| match e {
        StoreError::Conflict(visit_date) => {
            tracing::debug!(%visit_date, "Appointment insert lost a race for the date");
            BookingError::Rejected(RejectionReason::DuplicateAppointment)
        }
        StoreError::Backend(source) => BookingError::InsertFailed(source),
    })?;

    tracing::info!(
        id = appointment.id.value(),
        visit_date = %appointment.visit_date,
        "Appointment created"
    );

    Ok(appointment)
}
