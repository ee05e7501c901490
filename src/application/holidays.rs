use crate::domain::BlockedDateSet;
use crate::ports::HolidaySource;
use thiserror::Error;

/// 祝日読み込みのエラー
#[derive(Debug, Error)]
#[error("Failed to load public holidays for {year} in {country_code}")]
pub struct HolidayLoadError {
    pub year: i32,
    pub country_code: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// 運用年の祝日を取得し、予約不可日の集合を作る
///
/// 起動時に一度だけ呼ばれる。運用年以外の日付は捨てる。
pub async fn load_blocked_dates(
    source: &dyn HolidaySource,
    year: i32,
    country_code: &str,
) -> Result<BlockedDateSet, HolidayLoadError> {
    tracing::info!("Loading public holidays for {} in {}...", year, country_code);

    let holidays = source
        .public_holidays(year, country_code)
        .await
        .map_err(|source| HolidayLoadError {
            year,
            country_code: country_code.to_string(),
            source,
        })?;

    for holiday in &holidays {
        tracing::debug!("Loaded holiday: {} - {}", holiday.date, holiday.name);
    }

    let blocked = BlockedDateSet::from_holidays(year, &holidays);
    if blocked.is_empty() {
        tracing::warn!("No public holidays found for {} in {}", year, country_code);
    }

    tracing::info!(
        "Successfully loaded {} public holidays for {}",
        blocked.len(),
        year
    );

    Ok(blocked)
}
