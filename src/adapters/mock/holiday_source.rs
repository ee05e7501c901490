use crate::domain::PublicHoliday;
use crate::ports::holiday_source::{HolidaySource as HolidaySourceTrait, Result};
use async_trait::async_trait;
use chrono::Datelike;

/// Mock implementation of HolidaySource
///
/// Serves a fixed list of holidays regardless of country.
/// Only holidays in the requested year are returned.
#[derive(Debug, Clone, Default)]
pub struct HolidaySource {
    holidays: Vec<PublicHoliday>,
}

impl HolidaySource {
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        Self { holidays }
    }
}

#[async_trait]
impl HolidaySourceTrait for HolidaySource {
    async fn public_holidays(&self, year: i32, _country_code: &str) -> Result<Vec<PublicHoliday>> {
        Ok(self
            .holidays
            .iter()
            .filter(|holiday| holiday.date.year() == year)
            .cloned()
            .collect())
    }
}
