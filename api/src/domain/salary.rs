//! Salary proration
//!
//! Pay for a date range is derived from the monthly salary using a fixed
//! 30-day month. Arithmetic stays in `Decimal` so results are exact in base 10.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Divisor applied to the monthly salary to get a daily rate
pub const DAYS_PER_MONTH: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryError {
    #[error("End date {end} must be on or after start date {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Pay period must contain at least one day, got {days}")]
    EmptyPeriod { days: i64 },

    #[error("Salary amount overflowed for a {days}-day period")]
    Overflow { days: i64 },
}

/// Number of days in `[start, end]`, counting both ends.
///
/// Partial days are truncated before the inclusive `+ 1`, so a range from
/// 09:00 on the 1st to 08:00 on the 2nd counts as one day.
pub fn inclusive_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_days() + 1
}

/// Daily rate for a monthly salary
pub fn daily_rate(monthly_salary: Decimal) -> Decimal {
    monthly_salary / Decimal::from(DAYS_PER_MONTH)
}

/// Prorated pay for the inclusive range `[start, end]`
pub fn compute_salary(
    monthly_salary: Decimal,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Decimal, SalaryError> {
    if end < start {
        return Err(SalaryError::InvalidRange { start, end });
    }

    let days = inclusive_days(start, end);
    if days <= 0 {
        return Err(SalaryError::EmptyPeriod { days });
    }

    daily_rate(monthly_salary)
        .checked_mul(Decimal::from(days))
        .ok_or(SalaryError::Overflow { days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn five_days_of_six_thousand_is_one_thousand() {
        let total = compute_salary(Decimal::from(6000), day(2023, 1, 1), day(2023, 1, 5)).unwrap();
        assert_eq!(total, Decimal::from(1000));
    }

    #[test]
    fn single_day_is_one_thirtieth() {
        for monthly in [6000, 100_000, 999_999, 1] {
            let monthly = Decimal::from(monthly);
            let total = compute_salary(monthly, day(2024, 2, 29), day(2024, 2, 29)).unwrap();
            assert_eq!(total, monthly / Decimal::from(30));
        }
    }

    #[test]
    fn full_calendar_month_is_not_calendar_accurate() {
        // 31 days at a 30-day rate
        let total = compute_salary(Decimal::from(3000), day(2023, 1, 1), day(2023, 1, 31)).unwrap();
        assert_eq!(total, Decimal::from(3100));
    }

    #[test]
    fn end_before_start_is_invalid_range() {
        let start = day(2023, 1, 5);
        let end = day(2023, 1, 1);
        assert_eq!(
            compute_salary(Decimal::from(6000), start, end),
            Err(SalaryError::InvalidRange { start, end })
        );
    }

    #[test]
    fn end_one_second_before_start_is_still_invalid() {
        let start = day(2023, 1, 5);
        let end = start - chrono::Duration::seconds(1);
        assert!(matches!(
            compute_salary(Decimal::from(6000), start, end),
            Err(SalaryError::InvalidRange { .. })
        ));
    }

    #[test]
    fn partial_days_are_truncated() {
        let start = day(2023, 1, 1) + chrono::Duration::hours(9);
        let end = day(2023, 1, 2) + chrono::Duration::hours(8);
        assert_eq!(inclusive_days(start, end), 1);
    }

    #[test]
    fn fractional_daily_rate_keeps_decimal_precision() {
        let total = compute_salary(Decimal::from(1000), day(2023, 3, 1), day(2023, 3, 3)).unwrap();
        // 1000 / 30 * 3 without intermediate rounding to cents
        assert_eq!(total.round_dp(10), Decimal::from(100));
    }

    #[test]
    fn huge_salary_overflows_instead_of_panicking() {
        let result = compute_salary(Decimal::MAX, day(2000, 1, 1), day(2023, 1, 1));
        assert!(matches!(result, Err(SalaryError::Overflow { .. })));
    }
}
