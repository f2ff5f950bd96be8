//! The `updated_date` column: random calendar days in a window ending now.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use rand::Rng;

use crate::error::FareGenError;

pub const DEFAULT_WINDOW_DAYS: u32 = 365;

/// The half-open span of time `[start, end)` that update timestamps are drawn
/// from. Only the calendar date of a draw is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    /// # Errors
    /// Errors when `days` is zero or reaching back `days` from `end` leaves
    /// the representable date range
    pub fn ending_at(end: NaiveDateTime, days: u32) -> Result<Self, FareGenError> {
        if days == 0 {
            return Err(FareGenError::InvalidDateWindow(days));
        }
        let start = end
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or(FareGenError::InvalidDateWindow(days))?;
        Ok(DateWindow { start, end })
    }

    /// # Errors
    /// See [`DateWindow::ending_at`]
    pub fn ending_now(days: u32) -> Result<Self, FareGenError> {
        DateWindow::ending_at(Local::now().naive_local(), days)
    }

    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.gen_range(0..self.total_seconds());
        (self.start + Duration::seconds(offset)).date()
    }
}

/// Draws `count` dates uniformly from `window`.
pub fn sample_dates<R: Rng + ?Sized>(
    rng: &mut R,
    window: &DateWindow,
    count: usize,
) -> Vec<NaiveDate> {
    (0..count).map(|_| window.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_end() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(15, 30, 0).unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let window = DateWindow::ending_at(fixed_end(), DEFAULT_WINDOW_DAYS).unwrap();
        assert_eq!(window.total_seconds(), 365 * 86_400);
        // 2024 is a leap year, so 365 days back from March 1st is March 2nd 2023
        assert_eq!(window.first_day(), NaiveDate::from_ymd_opt(2023, 3, 2).unwrap());
        assert_eq!(window.last_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_empty_window() {
        let res = DateWindow::ending_at(fixed_end(), 0);
        assert!(matches!(res, Err(FareGenError::InvalidDateWindow(0))));
    }

    #[test]
    fn test_sample_dates_within_window() {
        let window = DateWindow::ending_at(fixed_end(), DEFAULT_WINDOW_DAYS).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let dates = sample_dates(&mut rng, &window, 10_000);
        assert_eq!(dates.len(), 10_000);
        for date in &dates {
            assert!(*date >= window.first_day() && *date <= window.last_day());
        }
        let first = dates.iter().min().unwrap();
        let last = dates.iter().max().unwrap();
        assert!(*last - *first > Duration::days(300));
    }

    #[test]
    fn test_one_day_window() {
        let window = DateWindow::ending_at(fixed_end(), 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let end_day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        for date in sample_dates(&mut rng, &window, 100) {
            assert!(date == leap_day || date == end_day);
        }
    }
}
