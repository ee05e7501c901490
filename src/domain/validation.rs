use super::{
    BlockedDateSet, NewAppointment, OperatingWindow, RejectionReason, VisitDate,
    commands::AppointmentRequest,
};

// ============================================================================
// 検証チェーン
// ============================================================================

/// 暦に関するチェックが参照する読み取り専用の状態
#[derive(Debug, Clone, Copy)]
pub struct CalendarContext<'a> {
    pub window: &'a OperatingWindow,
    pub blocked_dates: &'a BlockedDateSet,
}

/// 名前付きの日付チェック
#[derive(Clone, Copy)]
pub struct DateCheck {
    pub name: &'static str,
    pub run: fn(VisitDate, &CalendarContext<'_>) -> Result<(), RejectionReason>,
}

/// 解析済みの来訪日に対するチェック（この順で評価し、最初の失敗で打ち切る）
pub const CALENDAR_CHECKS: [DateCheck; 3] = [
    DateCheck {
        name: "year_bound",
        run: check_year_bound,
    },
    DateCheck {
        name: "past_date",
        run: check_not_past,
    },
    DateCheck {
        name: "public_holiday",
        run: check_not_holiday,
    },
];

fn check_year_bound(date: VisitDate, ctx: &CalendarContext<'_>) -> Result<(), RejectionReason> {
    if ctx.window.contains_year(date) {
        Ok(())
    } else {
        Err(RejectionReason::InvalidYear)
    }
}

fn check_not_past(date: VisitDate, ctx: &CalendarContext<'_>) -> Result<(), RejectionReason> {
    if ctx.window.is_past(date) {
        Err(RejectionReason::PastDate)
    } else {
        Ok(())
    }
}

fn check_not_holiday(date: VisitDate, ctx: &CalendarContext<'_>) -> Result<(), RejectionReason> {
    if ctx.blocked_dates.contains(date) {
        Err(RejectionReason::PublicHoliday)
    } else {
        Ok(())
    }
}

fn check_required_fields(request: &AppointmentRequest) -> Result<(), RejectionReason> {
    if request.first_name.is_empty()
        || request.last_name.is_empty()
        || request.visit_date.is_empty()
    {
        return Err(RejectionReason::MissingFields);
    }
    Ok(())
}

/// 予約リクエストを検証する（純粋な関数）
///
/// 重複確認以外のチェックを順に評価する：
/// 1. 必須項目 → `MissingFields`
/// 2. 日付書式 → `InvalidDate`
/// 3. 運用年 → `InvalidYear`
/// 4. 過去日（当日は可） → `PastDate`
/// 5. 祝日 → `PublicHoliday`
///
/// 重複確認（6）はストアへの問い合わせを伴うため、アプリケーション層で行う。
pub fn screen_request(
    request: &AppointmentRequest,
    window: &OperatingWindow,
    blocked_dates: &BlockedDateSet,
) -> Result<NewAppointment, RejectionReason> {
    check_required_fields(request)?;

    let visit_date =
        VisitDate::parse(&request.visit_date).map_err(|_| RejectionReason::InvalidDate)?;

    let ctx = CalendarContext {
        window,
        blocked_dates,
    };
    for check in CALENDAR_CHECKS.iter() {
        (check.run)(visit_date, &ctx)?;
    }

    Ok(NewAppointment {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        visit_date,
    })
}
