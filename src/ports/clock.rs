use chrono::NaiveDate;

/// 現在日付ポート
///
/// 「今日」の取得を抽象化し、テストで固定できるようにする。
pub trait Clock: Send + Sync {
    /// 今日の日付
    fn today(&self) -> NaiveDate;
}
