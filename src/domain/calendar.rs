use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use super::VisitDate;

// ============================================================================
// 祝日
// ============================================================================

/// 祝日カレンダーの1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicHoliday {
    pub date: NaiveDate,
    pub name: String,
}

/// 予約不可日の集合（運用年の祝日）
///
/// 起動時に一度だけ構築され、以後は読み取り専用。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDateSet {
    dates: HashSet<NaiveDate>,
}

impl BlockedDateSet {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// 祝日一覧から、指定年に属する日付だけを集める
    pub fn from_holidays<'a>(
        year: i32,
        holidays: impl IntoIterator<Item = &'a PublicHoliday>,
    ) -> Self {
        Self::new(
            holidays
                .into_iter()
                .map(|holiday| holiday.date)
                .filter(|date| date.year() == year),
        )
    }

    pub fn contains(&self, date: VisitDate) -> bool {
        self.dates.contains(&date.value())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

// ============================================================================
// 運用期間
// ============================================================================

/// 運用期間
///
/// 予約可能な単一の暦年と、それより前の日付を却下する基準日（擬似的な「今日」）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    year: i32,
    today: NaiveDate,
}

impl OperatingWindow {
    /// 実際の今日の月日と、設定された年を組み合わせて運用期間を作る
    ///
    /// 実際の今日が2月29日で設定年が閏年でない場合は2月28日とする。
    pub fn simulated(year: i32, real_today: NaiveDate) -> Self {
        let today = NaiveDate::from_ymd_opt(year, real_today.month(), real_today.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, real_today.month(), 28))
            .unwrap_or(real_today);

        Self { year, today }
    }

    /// 基準日を固定した運用期間（テスト用）
    ///
    /// 運用年は基準日の年になる。
    #[cfg(test)]
    pub fn pinned(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            today,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// 来訪日が運用年に属するか
    pub fn contains_year(&self, date: VisitDate) -> bool {
        date.year() == self.year
    }

    /// 来訪日が基準日より厳密に前か（当日は過去ではない）
    pub fn is_past(&self, date: VisitDate) -> bool {
        date.value() < self.today
    }
}
