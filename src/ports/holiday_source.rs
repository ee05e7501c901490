use crate::domain::PublicHoliday;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 祝日カレンダーポート
///
/// 外部の祝日APIなどを抽象化する。起動時に一度だけ呼ばれる。
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// 指定年・国の祝日一覧を取得する
    async fn public_holidays(&self, year: i32, country_code: &str) -> Result<Vec<PublicHoliday>>;
}
