use chrono::{Datelike, NaiveDate};
use std::fmt;

/// 来訪日の書式（YYYY-MM-DD）
pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

/// 予約ID - ストアが採番する単調増加の整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppointmentId(i64);

impl AppointmentId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 来訪日の解析エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVisitDate;

/// 来訪日
///
/// 不変条件：`YYYY-MM-DD`（年4桁・月2桁・日2桁、ハイフン区切り）で
/// 表現できる実在の暦日のみを保持する。
/// chronoの`%Y`は符号や桁数の異なる年も受け付けるため、
/// 書式の形は解析前に自前で確認する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisitDate(NaiveDate);

impl VisitDate {
    /// 文字列を厳密に解析する
    ///
    /// # エラー
    /// 書式違反、部分的な日付、数字以外の構成要素、実在しない日付の場合は
    /// `InvalidVisitDate`を返す
    pub fn parse(raw: &str) -> Result<Self, InvalidVisitDate> {
        let bytes = raw.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });

        if !well_formed {
            return Err(InvalidVisitDate);
        }

        NaiveDate::parse_from_str(raw, VISIT_DATE_FORMAT)
            .map(Self)
            .map_err(|_| InvalidVisitDate)
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for VisitDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(VISIT_DATE_FORMAT))
    }
}

impl From<NaiveDate> for VisitDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
