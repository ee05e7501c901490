use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::adapters::nager::holiday_source::DEFAULT_BASE_URL;
use crate::domain::VisitDate;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/appointments";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_COUNTRY_CODE: &str = "GB";

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage: civic-appointments <year> (or set OPERATING_YEAR)")]
    MissingYear,

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid STORE: {0} (expected postgres or memory)")]
    InvalidStore(String),

    #[error("Invalid TODAY: {0} (expected YYYY-MM-DD)")]
    InvalidToday(String),

    #[error("TODAY {today} is outside the operating year {operating_year}")]
    TodayOutsideYear {
        today: NaiveDate,
        operating_year: i32,
    },
}

/// 予約の保存先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// プロセス設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub operating_year: i32,
    pub database_url: String,
    pub port: u16,
    pub country_code: String,
    pub holiday_api_url: String,
    pub store: StoreKind,
    /// 擬似的な「今日」を固定する（デモ用）
    pub today_override: Option<NaiveDate>,
}

impl Config {
    /// 実プロセスのコマンドライン引数と環境変数から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// 引数（プログラム名を除く）と環境変数の参照関数から読み込む
    ///
    /// 運用年は第1引数、なければ`OPERATING_YEAR`。
    pub fn load<I, F>(args: I, env: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let year_raw = args
            .into_iter()
            .next()
            .or_else(|| env("OPERATING_YEAR"))
            .ok_or(ConfigError::MissingYear)?;
        let operating_year = year_raw
            .trim()
            .parse::<i32>()
            .map_err(|_| ConfigError::InvalidYear(year_raw.clone()))?;

        let port = match env("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let store = match env("STORE").as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => return Err(ConfigError::InvalidStore(other.to_string())),
        };

        let today_override = env("TODAY")
            .map(|raw| {
                VisitDate::parse(&raw)
                    .map(|date| date.value())
                    .map_err(|_| ConfigError::InvalidToday(raw))
            })
            .transpose()?;

        if let Some(today) = today_override.filter(|today| today.year() != operating_year) {
            return Err(ConfigError::TodayOutsideYear {
                today,
                operating_year,
            });
        }

        Ok(Self {
            operating_year,
            database_url: env("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            port,
            country_code: env("HOLIDAY_COUNTRY").unwrap_or_else(|| DEFAULT_COUNTRY_CODE.into()),
            holiday_api_url: env("HOLIDAY_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            store,
            today_override,
        })
    }
}
