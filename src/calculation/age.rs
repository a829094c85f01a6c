//! Age calculation in whole years.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Returns the age in whole years on `as_of` for someone born on `date_of_birth`.
///
/// The age increments on the birthday itself. The anniversary test shifts
/// `as_of` back by the year difference using calendar month arithmetic, so a
/// February 29 birthday is reached on March 1 in non-leap years.
///
/// A birth date after `as_of` produces a negative age. Rejecting such dates
/// is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_age;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1974, 1, 2).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(calculate_age(dob, as_of), 50);
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// assert_eq!(calculate_age(dob, as_of), 51);
/// ```
pub fn calculate_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - date_of_birth.year();
    if date_of_birth > shift_years_back(as_of, age) {
        age -= 1;
    }
    age
}

/// Age on today's local date.
pub fn age_today(date_of_birth: NaiveDate) -> i32 {
    calculate_age(date_of_birth, Local::now().date_naive())
}

/// Moves `date` back by `years` (forward when negative), clamping the day to
/// the end of the target month.
fn shift_years_back(date: NaiveDate, years: i32) -> NaiveDate {
    let months = Months::new(years.unsigned_abs() * 12);
    let shifted = if years >= 0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    };
    // The target year is the birth year, which is itself a valid NaiveDate year.
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_after_birthday_this_year() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2025, 8, 1)), 35);
    }

    #[test]
    fn test_age_before_birthday_this_year() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2025, 3, 1)), 34);
    }

    #[test]
    fn test_age_increments_on_birthday() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2025, 5, 9)), 34);
        assert_eq!(calculate_age(date(1990, 5, 10), date(2025, 5, 10)), 35);
    }

    #[test]
    fn test_born_today_is_zero() {
        assert_eq!(calculate_age(date(2025, 5, 10), date(2025, 5, 10)), 0);
    }

    #[test]
    fn test_leap_day_birthday_in_non_leap_year() {
        let dob = date(2000, 2, 29);
        assert_eq!(calculate_age(dob, date(2023, 2, 28)), 22);
        assert_eq!(calculate_age(dob, date(2023, 3, 1)), 23);
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        let dob = date(2000, 2, 29);
        assert_eq!(calculate_age(dob, date(2024, 2, 28)), 23);
        assert_eq!(calculate_age(dob, date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_new_years_eve_boundary() {
        let dob = date(1984, 12, 31);
        assert_eq!(calculate_age(dob, date(2024, 12, 30)), 39);
        assert_eq!(calculate_age(dob, date(2024, 12, 31)), 40);
    }

    #[test]
    fn test_future_birth_date_is_negative() {
        assert!(calculate_age(date(2030, 6, 1), date(2025, 1, 1)) < 0);
    }

    #[test]
    fn test_age_today_matches_explicit_today() {
        let dob = date(1980, 7, 15);
        let today = Local::now().date_naive();
        assert_eq!(age_today(dob), calculate_age(dob, today));
    }
}
