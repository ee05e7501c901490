use crate::domain::PublicHoliday;
use crate::ports::holiday_source::{HolidaySource as HolidaySourceTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Public Nager.Date endpoint
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while talking to the holiday API
#[derive(Debug, Error)]
pub enum NagerError {
    #[error("public holiday request failed")]
    Request(#[from] reqwest::Error),

    #[error("public holiday API returned status: {0}")]
    UnexpectedStatus(u16),
}

/// Subset of the Nager.Date `PublicHolidayV3Dto` we rely on
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NagerHoliday {
    date: NaiveDate,
    local_name: String,
}

impl From<NagerHoliday> for PublicHoliday {
    fn from(holiday: NagerHoliday) -> Self {
        Self {
            date: holiday.date,
            name: holiday.local_name,
        }
    }
}

/// HolidaySource backed by the Nager.Date public holiday API
///
/// `GET {base_url}/api/v3/PublicHolidays/{year}/{country_code}`
pub struct HolidaySource {
    client: reqwest::Client,
    base_url: String,
}

impl HolidaySource {
    /// Create a client against the given API root (without trailing path)
    pub fn new(base_url: impl Into<String>) -> std::result::Result<Self, NagerError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, year: i32, country_code: &str) -> String {
        format!(
            "{}/api/v3/PublicHolidays/{}/{}",
            self.base_url, year, country_code
        )
    }

    async fn fetch(
        &self,
        year: i32,
        country_code: &str,
    ) -> std::result::Result<Vec<PublicHoliday>, NagerError> {
        let response = self.client.get(self.url(year, country_code)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NagerError::UnexpectedStatus(status.as_u16()));
        }

        let holidays: Vec<NagerHoliday> = response.json().await?;
        Ok(holidays.into_iter().map(PublicHoliday::from).collect())
    }
}

#[async_trait]
impl HolidaySourceTrait for HolidaySource {
    async fn public_holidays(&self, year: i32, country_code: &str) -> Result<Vec<PublicHoliday>> {
        Ok(self.fetch(year, country_code).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_trailing_slash() {
        let source = HolidaySource::new("http://localhost:9999/").unwrap();
        assert_eq!(
            source.url(2075, "GB"),
            "http://localhost:9999/api/v3/PublicHolidays/2075/GB"
        );
    }

    #[test]
    fn test_decode_nager_payload() {
        let payload = r#"[
            {
                "date": "2075-12-25",
                "localName": "Christmas Day",
                "name": "Christmas Day",
                "countryCode": "GB",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            }
        ]"#;

        let decoded: Vec<NagerHoliday> = serde_json::from_str(payload).unwrap();
        let holidays: Vec<PublicHoliday> = decoded.into_iter().map(PublicHoliday::from).collect();

        assert_eq!(holidays.len(), 1);
        assert_eq!(
            holidays[0].date,
            NaiveDate::from_ymd_opt(2075, 12, 25).unwrap()
        );
        assert_eq!(holidays[0].name, "Christmas Day");
    }
}
