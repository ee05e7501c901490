use crate::ports::Clock;
use chrono::{NaiveDate, Utc};

/// Clock backed by the system time (UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_given_date() {
        let date = NaiveDate::from_ymd_opt(2075, 1, 1).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(date));

        assert_eq!(clock.today(), date);
    }
}
