//! Whole-year age arithmetic
//!
//! Age is measured in complete years elapsed: the calendar-year difference,
//! minus one when the anniversary day has not yet occurred in the reference
//! year. The day-of-year comparison approximates month/day comparison; in
//! leap years the Feb 29 boundary can shift by one day relative to other
//! years. Downstream rules pin exact ages to this behavior, so the rounding
//! must not change.

use chrono::{Datelike, NaiveDate};

/// Returns the number of complete years between `birth` and `reference`.
///
/// The result is negative when `reference` precedes `birth`; callers that
/// care about ordering check it before interpreting the value as an age.
pub fn whole_years_between(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();
    if reference.ordinal() < birth.ordinal() {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_anniversary_already_passed() {
        assert_eq!(whole_years_between(date(1990, 1, 1), date(2020, 6, 15)), 30);
    }

    #[test]
    fn test_anniversary_not_yet_reached() {
        assert_eq!(whole_years_between(date(1990, 6, 15), date(2020, 1, 1)), 29);
    }

    #[test]
    fn test_anniversary_day_counts_as_completed_year() {
        assert_eq!(whole_years_between(date(1990, 6, 15), date(2020, 6, 15)), 30);
    }

    #[test]
    fn test_reference_before_birth_is_negative() {
        assert_eq!(whole_years_between(date(1990, 1, 1), date(1989, 1, 1)), -1);
    }
}
